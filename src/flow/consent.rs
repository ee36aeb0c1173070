//! Consent section: the gate for the entire interview
//!
//! Establishes that the subject understands the purpose of the interview
//! (offering an explanation when they do not), asks for permission to
//! proceed, and collects age and biological sex only after an individual
//! consent sub-question for each. Anything but an explicit Yes on
//! `gives_permission` completes this step with `Halt`, which makes the
//! controller terminate the whole session.

use crate::answers::{free_text, parse_bounded_u8, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

/// Purpose explanation surfaced when the subject asks for one
const PURPOSE_EXPLANATION: &str = "This interview documents what happened in your own words, \
     records any injuries, and lets you decide what evidence is collected. \
     You may decline any question, and nothing happens without your permission.";

/// Oldest age accepted from free-text input
const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsentState {
    Start,
    Purpose,
    ExplainOffer,
    Explanation,
    Permission,
    AgeConsent,
    Age,
    SexConsent,
    Sex,
    Done(Completion),
}

/// Resumable consent step
#[derive(Debug)]
pub struct ConsentStep {
    state: ConsentState,
}

impl ConsentStep {
    pub fn new() -> Self {
        ConsentStep {
            state: ConsentState::Start,
        }
    }

    fn ask_permission(&mut self) -> StepOutcome {
        self.state = ConsentState::Permission;
        StepOutcome::Ask(Question::yes_no(
            "Do you give permission to continue with this interview?",
        ))
    }

    fn ask_sex_consent(&mut self) -> StepOutcome {
        self.state = ConsentState::SexConsent;
        StepOutcome::Ask(Question::yes_no(
            "May I ask about your biological sex?",
        ))
    }
}

impl Default for ConsentStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for ConsentStep {
    fn name(&self) -> &'static str {
        "consent"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use ConsentState::*;

        match self.state {
            Start => {
                self.state = Purpose;
                StepOutcome::Ask(
                    Question::yes_no("Do you understand the purpose of this interview?")
                        .with_explanation(PURPOSE_EXPLANATION),
                )
            }
            Purpose => {
                let answer = parse_yes_no(input);
                record.consent.understands_purpose = Some(answer);
                if answer == Answer::Yes {
                    // Understood: an explanation is implicitly not wanted
                    self.ask_permission()
                } else {
                    self.state = ExplainOffer;
                    StepOutcome::Ask(Question::yes_no(
                        "Would you like me to explain the purpose of this interview?",
                    ))
                }
            }
            ExplainOffer => {
                let answer = parse_yes_no(input);
                record.consent.wants_explanation = Some(answer);
                if answer == Answer::Yes {
                    self.state = Explanation;
                    StepOutcome::Ask(Question::info(PURPOSE_EXPLANATION))
                } else {
                    self.ask_permission()
                }
            }
            Explanation => self.ask_permission(),
            Permission => {
                let answer = parse_yes_no(input);
                record.consent.gives_permission = Some(answer);
                if answer != Answer::Yes {
                    // The gate closes permanently
                    self.state = Done(Completion::Halt);
                    StepOutcome::Complete(Completion::Halt)
                } else {
                    self.state = AgeConsent;
                    StepOutcome::Ask(Question::yes_no("May I ask your age?"))
                }
            }
            AgeConsent => {
                let answer = parse_yes_no(input);
                record.consent.agrees_age_question = Some(answer);
                if answer == Answer::Yes {
                    self.state = Age;
                    StepOutcome::Ask(Question::text("What is your age in years?"))
                } else {
                    self.ask_sex_consent()
                }
            }
            Age => {
                // Best effort: unparseable or out-of-range input leaves age unset
                record.consent.age = parse_bounded_u8(input, MAX_AGE);
                self.ask_sex_consent()
            }
            SexConsent => {
                let answer = parse_yes_no(input);
                record.consent.agrees_sex_question = Some(answer);
                if answer == Answer::Yes {
                    self.state = Sex;
                    StepOutcome::Ask(
                        Question::text("What is your biological sex?")
                            .with_options(vec!["female", "male", "intersex"]),
                    )
                } else {
                    self.state = Done(Completion::Continue);
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            Sex => {
                record.consent.biological_sex = free_text(input);
                self.state = Done(Completion::Continue);
                StepOutcome::Complete(Completion::Continue)
            }
            Done(completion) => StepOutcome::Complete(completion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::testutil::run_step;
    use crate::questions::QuestionKind;

    #[test]
    fn test_full_consent_path() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("yes"),    // understands purpose
                Some("yes"),    // gives permission
                Some("yes"),    // may ask age
                Some("30"),     // age
                Some("yes"),    // may ask sex
                Some("female"), // biological sex
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 6);
        assert_eq!(record.consent.understands_purpose, Some(Answer::Yes));
        assert!(record.consent.wants_explanation.is_none());
        assert_eq!(record.consent.gives_permission, Some(Answer::Yes));
        assert_eq!(record.consent.age, Some(30));
        assert_eq!(record.consent.biological_sex.as_deref(), Some("female"));
    }

    #[test]
    fn test_permission_denied_halts() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("yes"), // understands purpose
                Some("no"),  // permission denied
            ],
        );

        assert_eq!(completion, Completion::Halt);
        assert_eq!(asked.len(), 2);
        assert_eq!(record.consent.gives_permission, Some(Answer::No));
        // Demographics were never reached
        assert!(record.consent.age.is_none());
        assert!(record.consent.agrees_age_question.is_none());
    }

    #[test]
    fn test_unrecognized_permission_also_halts() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (_, completion) = run_step(
            &mut step,
            &mut record,
            &[Some("yes"), Some("maybe-ish")],
        );

        assert_eq!(completion, Completion::Halt);
        assert_eq!(record.consent.gives_permission, Some(Answer::Decline));
    }

    #[test]
    fn test_explanation_offered_when_purpose_unclear() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("no"),  // does not understand purpose
                Some("yes"), // wants explanation
                None,        // acknowledges the Info turn
                Some("yes"), // gives permission
                Some("no"),  // declines age question
                Some("no"),  // declines sex question
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked[2].kind, QuestionKind::Info);
        assert!(asked[2].text.contains("documents what happened"));
        assert_eq!(record.consent.wants_explanation, Some(Answer::Yes));
        assert!(record.consent.age.is_none());
        assert!(record.consent.biological_sex.is_none());
    }

    #[test]
    fn test_explanation_declined_goes_straight_to_permission() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (asked, _) = run_step(
            &mut step,
            &mut record,
            &[Some("unsure"), Some("no"), Some("no")],
        );

        assert_eq!(record.consent.understands_purpose, Some(Answer::Unsure));
        assert_eq!(record.consent.wants_explanation, Some(Answer::No));
        // No Info turn was surfaced
        assert!(asked.iter().all(|q| q.kind != QuestionKind::Info));
        assert_eq!(record.consent.gives_permission, Some(Answer::No));
    }

    #[test]
    fn test_unparseable_age_left_unset() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (_, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("yes"),
                Some("yes"),
                Some("yes"),
                Some("thirty"), // cannot be parsed
                Some("no"),
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(record.consent.agrees_age_question, Some(Answer::Yes));
        assert!(record.consent.age.is_none());
    }

    #[test]
    fn test_declined_demographics_skip_their_questions() {
        let mut record = InterviewRecord::new();
        let mut step = ConsentStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[Some("yes"), Some("yes"), Some("skip"), Some("no")],
        );

        assert_eq!(completion, Completion::Continue);
        // purpose, permission, age consent, sex consent; no age or sex question
        assert_eq!(asked.len(), 4);
        assert_eq!(record.consent.agrees_age_question, Some(Answer::Decline));
        assert!(record.consent.age.is_none());
        assert!(record.consent.biological_sex.is_none());
    }
}
