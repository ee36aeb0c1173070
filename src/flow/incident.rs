//! Incident history section
//!
//! Free-text account of the incident followed by four yes/no screens, each
//! with a detail follow-up asked only on an affirmative answer: weapons,
//! physical restraint, forced substances, and witnesses (the witness
//! follow-up also takes a best-effort headcount).

use crate::answers::{free_text, parse_count, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IncidentState {
    Start,
    Description,
    Weapons,
    WeaponDetails,
    Restrained,
    RestraintDetails,
    Substances,
    SubstanceDetails,
    Witnesses,
    WitnessDetails,
    WitnessCount,
    Done,
}

/// Resumable incident-history step
#[derive(Debug)]
pub struct IncidentStep {
    state: IncidentState,
}

impl IncidentStep {
    pub fn new() -> Self {
        IncidentStep {
            state: IncidentState::Start,
        }
    }

    fn ask_restrained(&mut self) -> StepOutcome {
        self.state = IncidentState::Restrained;
        StepOutcome::Ask(Question::yes_no("Were you physically restrained?"))
    }

    fn ask_substances(&mut self) -> StepOutcome {
        self.state = IncidentState::Substances;
        StepOutcome::Ask(Question::yes_no(
            "Were you forced to take any substances (drugs or alcohol)?",
        ))
    }

    fn ask_witnesses(&mut self) -> StepOutcome {
        self.state = IncidentState::Witnesses;
        StepOutcome::Ask(Question::yes_no("Was anyone else present who saw what happened?"))
    }
}

impl Default for IncidentStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for IncidentStep {
    fn name(&self) -> &'static str {
        "incident_history"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use IncidentState::*;

        match self.state {
            Start => {
                self.state = Description;
                StepOutcome::Ask(Question::text(
                    "In your own words, can you describe what happened?",
                ))
            }
            Description => {
                record.incident_history.description = free_text(input);
                self.state = Weapons;
                StepOutcome::Ask(Question::yes_no("Were any weapons used or threatened?"))
            }
            Weapons => {
                let answer = parse_yes_no(input);
                record.incident_history.weapons_used = Some(answer);
                if answer == Answer::Yes {
                    self.state = WeaponDetails;
                    StepOutcome::Ask(Question::text("What kind of weapon was it?"))
                } else {
                    self.ask_restrained()
                }
            }
            WeaponDetails => {
                record.incident_history.weapon_details = free_text(input);
                self.ask_restrained()
            }
            Restrained => {
                let answer = parse_yes_no(input);
                record.incident_history.physically_restrained = Some(answer);
                if answer == Answer::Yes {
                    self.state = RestraintDetails;
                    StepOutcome::Ask(Question::text("How were you restrained?"))
                } else {
                    self.ask_substances()
                }
            }
            RestraintDetails => {
                record.incident_history.restraint_details = free_text(input);
                self.ask_substances()
            }
            Substances => {
                let answer = parse_yes_no(input);
                record.incident_history.forced_substances = Some(answer);
                if answer == Answer::Yes {
                    self.state = SubstanceDetails;
                    StepOutcome::Ask(Question::text(
                        "What do you know about the substance involved?",
                    ))
                } else {
                    self.ask_witnesses()
                }
            }
            SubstanceDetails => {
                record.incident_history.substance_details = free_text(input);
                self.ask_witnesses()
            }
            Witnesses => {
                let answer = parse_yes_no(input);
                record.incident_history.witnesses = Some(answer);
                if answer == Answer::Yes {
                    self.state = WitnessDetails;
                    StepOutcome::Ask(Question::text("Who was present?"))
                } else {
                    self.state = Done;
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            WitnessDetails => {
                record.incident_history.witness_details = free_text(input);
                self.state = WitnessCount;
                StepOutcome::Ask(Question::text("How many people, roughly?"))
            }
            WitnessCount => {
                // Best effort; "a few" simply leaves the count unset
                record.incident_history.witness_count = parse_count(input);
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
    fn test_all_screens_negative() {
        let mut record = InterviewRecord::new();
        let mut step = IncidentStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("it happened at home"),
                Some("no"),
                Some("no"),
                Some("no"),
                Some("no"),
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 5);
        assert_eq!(record.incident_history.weapons_used, Some(Answer::No));
        assert!(record.incident_history.weapon_details.is_none());
        assert!(record.incident_history.restraint_details.is_none());
        assert!(record.incident_history.substance_details.is_none());
        assert!(record.incident_history.witness_details.is_none());
    }

    #[test]
    fn test_weapon_detail_not_asked_after_no() {
        let mut record = InterviewRecord::new();
        let mut step = IncidentStep::new();

        // First two turns: description question, then weapons question
        step.next(&mut record, None);
        step.next(&mut record, Some("incident description"));
        let outcome = step.next(&mut record, Some("no"));

        // The question after a "no" on weapons is restraint, not weapon detail
        match outcome {
            StepOutcome::Ask(q) => assert!(q.text.contains("restrained")),
            other => panic!("expected a question, got {:?}", other),
        }
        assert!(record.incident_history.weapon_details.is_none());
    }

    #[test]
    fn test_affirmed_screens_collect_details() {
        let mut record = InterviewRecord::new();
        let mut step = IncidentStep::new();

        let (asked, _) = run_step(
            &mut step,
            &mut record,
            &[
                Some("at a party"),
                Some("yes"),
                Some("a knife"),
                Some("yes"),
                Some("held down"),
                Some("yes"),
                Some("something in my drink"),
                Some("yes"),
                Some("two friends"),
                Some("2"),
            ],
        );

        assert_eq!(asked.len(), 10);
        assert_eq!(
            record.incident_history.weapon_details.as_deref(),
            Some("a knife")
        );
        assert_eq!(
            record.incident_history.restraint_details.as_deref(),
            Some("held down")
        );
        assert_eq!(
            record.incident_history.substance_details.as_deref(),
            Some("something in my drink")
        );
        assert_eq!(record.incident_history.witness_count, Some(2));
    }

    #[test]
    fn test_unparseable_headcount_left_unset() {
        let mut record = InterviewRecord::new();
        let mut step = IncidentStep::new();

        run_step(
            &mut step,
            &mut record,
            &[
                None,
                Some("no"),
                Some("no"),
                Some("no"),
                Some("yes"),
                Some("neighbors"),
                Some("a few"),
            ],
        );

        assert_eq!(
            record.incident_history.witness_details.as_deref(),
            Some("neighbors")
        );
        assert!(record.incident_history.witness_count.is_none());
    }

    #[test]
    fn test_unsure_treated_as_not_affirmed() {
        let mut record = InterviewRecord::new();
        let mut step = IncidentStep::new();

        let (asked, _) = run_step(
            &mut step,
            &mut record,
            &[None, Some("unsure"), Some("skip"), Some("u"), Some("no")],
        );

        // No detail follow-up for Unsure/Decline answers
        assert_eq!(asked.len(), 5);
        assert_eq!(record.incident_history.weapons_used, Some(Answer::Unsure));
        assert_eq!(
            record.incident_history.physically_restrained,
            Some(Answer::Decline)
        );
        assert!(record.incident_history.weapon_details.is_none());
    }
}
