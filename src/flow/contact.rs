//! Contact details section
//!
//! The body-contact description is free text; a case-insensitive keyword
//! table infers a set of contact-type tags from it (deliberately not
//! natural-language parsing, and not a fixed enum choice). Three yes/no
//! screens follow, each with a detail follow-up asked only on Yes.

use crate::answers::{free_text, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

/// Keyword containment table mapping description fragments to contact tags
const CONTACT_KEYWORDS: &[(&str, &str)] = &[
    ("mouth", "oral"),
    ("oral", "oral"),
    ("lip", "oral"),
    ("genital", "genital"),
    ("vagina", "genital"),
    ("penis", "genital"),
    ("anal", "anal"),
    ("anus", "anal"),
    ("rect", "anal"),
    ("hand", "digital"),
    ("finger", "digital"),
    ("breast", "breast"),
    ("chest", "breast"),
];

/// Infer contact-type tags from a free-text description by simple
/// case-insensitive keyword containment. Order follows the table; each tag
/// appears at most once. An empty result is reported as None.
pub fn infer_contact_types(description: &str) -> Option<Vec<String>> {
    let lowered = description.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    for (keyword, tag) in CONTACT_KEYWORDS {
        if lowered.contains(keyword) && !tags.iter().any(|t| t == tag) {
            tags.push((*tag).to_string());
        }
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactState {
    Start,
    BodyContact,
    Ejaculation,
    EjaculationLocation,
    Objects,
    ObjectDetails,
    Resistance,
    ResistanceDetails,
    Done,
}

/// Resumable contact-details step
#[derive(Debug)]
pub struct ContactStep {
    state: ContactState,
}

impl ContactStep {
    pub fn new() -> Self {
        ContactStep {
            state: ContactState::Start,
        }
    }

    fn ask_objects(&mut self) -> StepOutcome {
        self.state = ContactState::Objects;
        StepOutcome::Ask(Question::yes_no("Were any objects used?"))
    }

    fn ask_resistance(&mut self) -> StepOutcome {
        self.state = ContactState::Resistance;
        StepOutcome::Ask(Question::yes_no("Were you able to resist at any point?"))
    }
}

impl Default for ContactStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for ContactStep {
    fn name(&self) -> &'static str {
        "contact_details"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use ContactState::*;

        match self.state {
            Start => {
                self.state = BodyContact;
                StepOutcome::Ask(Question::text(
                    "Which parts of your body were touched or involved?",
                ))
            }
            BodyContact => {
                let description = free_text(input);
                if let Some(ref text) = description {
                    record.contact_details.contact_types = infer_contact_types(text);
                }
                record.contact_details.body_contact_description = description;
                self.state = Ejaculation;
                StepOutcome::Ask(Question::yes_no("Did ejaculation occur?"))
            }
            Ejaculation => {
                let answer = parse_yes_no(input);
                record.contact_details.ejaculation_occurred = Some(answer);
                if answer == Answer::Yes {
                    self.state = EjaculationLocation;
                    StepOutcome::Ask(Question::text("Where did ejaculation occur?"))
                } else {
                    self.ask_objects()
                }
            }
            EjaculationLocation => {
                record.contact_details.ejaculation_location = free_text(input);
                self.ask_objects()
            }
            Objects => {
                let answer = parse_yes_no(input);
                record.contact_details.objects_used = Some(answer);
                if answer == Answer::Yes {
                    self.state = ObjectDetails;
                    StepOutcome::Ask(Question::text("What objects were used?"))
                } else {
                    self.ask_resistance()
                }
            }
            ObjectDetails => {
                record.contact_details.object_details = free_text(input);
                self.ask_resistance()
            }
            Resistance => {
                let answer = parse_yes_no(input);
                record.contact_details.resisted = Some(answer);
                if answer == Answer::Yes {
                    self.state = ResistanceDetails;
                    StepOutcome::Ask(Question::text("How did you resist?"))
                } else {
                    self.state = Done;
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            ResistanceDetails => {
                record.contact_details.resistance_details = free_text(input);
                self.state = Done;
                StepOutcome::Complete(Completion::Continue)
            }
            Done => StepOutcome::Complete(Completion::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::testutil::run_step;

    #[test]
    fn test_infer_contact_types() {
        assert_eq!(
            infer_contact_types("he touched my mouth and chest"),
            Some(vec!["oral".to_string(), "breast".to_string()])
        );
        assert_eq!(
            infer_contact_types("FINGERS near the genital area"),
            Some(vec!["genital".to_string(), "digital".to_string()])
        );
        assert_eq!(infer_contact_types("my shoulder"), None);
    }

    #[test]
    fn test_infer_contact_types_deduplicates() {
        let tags = infer_contact_types("mouth, lips and oral contact").unwrap();
        assert_eq!(tags, vec!["oral".to_string()]);
    }

    #[test]
    fn test_tags_written_with_description() {
        let mut record = InterviewRecord::new();
        let mut step = ContactStep::new();

        run_step(
            &mut step,
            &mut record,
            &[
                Some("hands on my chest"),
                Some("no"),
                Some("no"),
                Some("no"),
            ],
        );

        assert_eq!(
            record.contact_details.body_contact_description.as_deref(),
            Some("hands on my chest")
        );
        assert_eq!(
            record.contact_details.contact_types,
            Some(vec!["digital".to_string(), "breast".to_string()])
        );
    }

    #[test]
    fn test_skipped_description_leaves_tags_unset() {
        let mut record = InterviewRecord::new();
        let mut step = ContactStep::new();

        run_step(
            &mut step,
            &mut record,
            &[Some(""), Some("no"), Some("no"), Some("no")],
        );

        assert!(record.contact_details.body_contact_description.is_none());
        assert!(record.contact_details.contact_types.is_none());
    }

    #[test]
    fn test_detail_followups_gated_on_yes() {
        let mut record = InterviewRecord::new();
        let mut step = ContactStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                None,
                Some("yes"),
                Some("on clothing"),
                Some("no"),
                Some("yes"),
                Some("pushed him away"),
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 6);
        assert_eq!(
            record.contact_details.ejaculation_location.as_deref(),
            Some("on clothing")
        );
        assert!(record.contact_details.object_details.is_none());
        assert_eq!(
            record.contact_details.resistance_details.as_deref(),
            Some("pushed him away")
        );
    }
}
