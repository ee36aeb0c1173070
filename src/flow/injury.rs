//! Injury assessment section
//!
//! Two screens: current pain (with locations and a best-effort 0-10 rating
//! when affirmed) and visible injuries (with details when affirmed).

use crate::answers::{free_text, parse_bounded_u8, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

const MAX_PAIN_RATING: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InjuryState {
    Start,
    Pain,
    PainLocations,
    PainRating,
    VisibleInjuries,
    InjuryDetails,
    Done,
}

/// Resumable injury-assessment step
#[derive(Debug)]
pub struct InjuryStep {
    state: InjuryState,
}

impl InjuryStep {
    pub fn new() -> Self {
        InjuryStep {
            state: InjuryState::Start,
        }
    }

    fn ask_visible_injuries(&mut self) -> StepOutcome {
        self.state = InjuryState::VisibleInjuries;
        StepOutcome::Ask(Question::yes_no(
            "Do you have any visible injuries, bruises, or marks?",
        ))
    }
}

impl Default for InjuryStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for InjuryStep {
    fn name(&self) -> &'static str {
        "injury_assessment"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use InjuryState::*;

        match self.state {
            Start => {
                self.state = Pain;
                StepOutcome::Ask(Question::yes_no("Are you in any pain right now?"))
            }
            Pain => {
                let answer = parse_yes_no(input);
                record.injury_assessment.in_pain = Some(answer);
                if answer == Answer::Yes {
                    self.state = PainLocations;
                    StepOutcome::Ask(Question::text("Where does it hurt?"))
                } else {
                    self.ask_visible_injuries()
                }
            }
            PainLocations => {
                record.injury_assessment.pain_locations = free_text(input);
                self.state = PainRating;
                StepOutcome::Ask(Question::text(
                    "On a scale from 0 to 10, how bad is the pain?",
                ))
            }
            PainRating => {
                record.injury_assessment.pain_rating = parse_bounded_u8(input, MAX_PAIN_RATING);
                self.ask_visible_injuries()
            }
            VisibleInjuries => {
                let answer = parse_yes_no(input);
                record.injury_assessment.visible_injuries = Some(answer);
                if answer == Answer::Yes {
                    self.state = InjuryDetails;
                    StepOutcome::Ask(Question::text("Can you describe the injuries?"))
                } else {
                    self.state = Done;
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            InjuryDetails => {
                record.injury_assessment.injury_details = free_text(input);
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
    fn test_pain_path_with_rating() {
        let mut record = InterviewRecord::new();
        let mut step = InjuryStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("yes"),
                Some("left wrist"),
                Some("7"),
                Some("yes"),
                Some("bruising on the wrist"),
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 5);
        assert_eq!(record.injury_assessment.pain_rating, Some(7));
        assert_eq!(
            record.injury_assessment.pain_locations.as_deref(),
            Some("left wrist")
        );
        assert_eq!(
            record.injury_assessment.injury_details.as_deref(),
            Some("bruising on the wrist")
        );
    }

    #[test]
    fn test_rating_out_of_range_left_unset() {
        let mut record = InterviewRecord::new();
        let mut step = InjuryStep::new();

        run_step(
            &mut step,
            &mut record,
            &[Some("yes"), Some("head"), Some("11"), Some("no")],
        );

        assert!(record.injury_assessment.pain_rating.is_none());
        assert_eq!(record.injury_assessment.visible_injuries, Some(Answer::No));
    }

    #[test]
    fn test_no_pain_skips_detail_questions() {
        let mut record = InterviewRecord::new();
        let mut step = InjuryStep::new();

        let (asked, _) = run_step(&mut step, &mut record, &[Some("no"), Some("no")]);

        assert_eq!(asked.len(), 2);
        assert!(record.injury_assessment.pain_locations.is_none());
        assert!(record.injury_assessment.pain_rating.is_none());
    }
}
