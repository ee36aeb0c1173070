//! Intro section: session metadata capture
//!
//! Opens the session with an informational turn, then records the
//! interviewer identifier and the anonymous subject identifier on the
//! record root. The creation timestamp was already captured when the
//! record was constructed.

use crate::answers::free_text;
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroState {
    Start,
    Welcome,
    Interviewer,
    SubjectId,
    Done,
}

/// Resumable intro step
#[derive(Debug)]
pub struct IntroStep {
    state: IntroState,
}

impl IntroStep {
    pub fn new() -> Self {
        IntroStep {
            state: IntroState::Start,
        }
    }
}

impl Default for IntroStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for IntroStep {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use IntroState::*;

        match self.state {
            Start => {
                self.state = Welcome;
                StepOutcome::Ask(Question::info(
                    "This is a structured intake interview. You may skip any question, \
                     and you can stop at any time.",
                ))
            }
            Welcome => {
                // Info acknowledged; nothing recorded
                self.state = Interviewer;
                StepOutcome::Ask(Question::text("Interviewer name or identifier?"))
            }
            Interviewer => {
                record.interviewer = free_text(input);
                self.state = SubjectId;
                StepOutcome::Ask(Question::text("Anonymous subject identifier?"))
            }
            SubjectId => {
                record.subject_id = free_text(input);
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
    use crate::questions::QuestionKind;

    #[test]
    fn test_intro_records_identifiers() {
        let mut record = InterviewRecord::new();
        let mut step = IntroStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[None, Some("Nurse A"), Some("P001")],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 3);
        assert_eq!(asked[0].kind, QuestionKind::Info);
        assert_eq!(record.interviewer.as_deref(), Some("Nurse A"));
        assert_eq!(record.subject_id.as_deref(), Some("P001"));
    }

    #[test]
    fn test_intro_tolerates_empty_input() {
        let mut record = InterviewRecord::new();
        let mut step = IntroStep::new();

        let (_, completion) = run_step(&mut step, &mut record, &[None, Some(""), None]);

        assert_eq!(completion, Completion::Continue);
        assert!(record.interviewer.is_none());
        assert!(record.subject_id.is_none());
    }

    #[test]
    fn test_completed_step_stays_complete() {
        let mut record = InterviewRecord::new();
        let mut step = IntroStep::new();
        run_step(&mut step, &mut record, &[None, Some("A"), Some("B")]);

        assert_eq!(
            step.next(&mut record, None),
            StepOutcome::Complete(Completion::Continue)
        );
    }
}
