//! Legal follow-up section
//!
//! Two screens: filing a police report and contact with a victim advocate,
//! each with a detail follow-up only on Yes.

use crate::answers::{free_text, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegalState {
    Start,
    PoliceReport,
    ReportDetails,
    Advocate,
    AdvocateDetails,
    Done,
}

/// Resumable legal follow-up step
#[derive(Debug)]
pub struct LegalStep {
    state: LegalState,
}

impl LegalStep {
    pub fn new() -> Self {
        LegalStep {
            state: LegalState::Start,
        }
    }

    fn ask_advocate(&mut self) -> StepOutcome {
        self.state = LegalState::Advocate;
        StepOutcome::Ask(Question::yes_no(
            "Would you like to be put in contact with a victim advocate?",
        ))
    }
}

impl Default for LegalStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for LegalStep {
    fn name(&self) -> &'static str {
        "legal_follow_up"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use LegalState::*;

        match self.state {
            Start => {
                self.state = PoliceReport;
                StepOutcome::Ask(
                    Question::yes_no("Do you want to file a police report?").with_explanation(
                        "Filing a report is your decision. Evidence collected today can be \
                         stored even if you decide later.",
                    ),
                )
            }
            PoliceReport => {
                let answer = parse_yes_no(input);
                record.legal_follow_up.wants_police_report = Some(answer);
                if answer == Answer::Yes {
                    self.state = ReportDetails;
                    StepOutcome::Ask(Question::text(
                        "Is there anything the police should know right away?",
                    ))
                } else {
                    self.ask_advocate()
                }
            }
            ReportDetails => {
                record.legal_follow_up.police_report_details = free_text(input);
                self.ask_advocate()
            }
            Advocate => {
                let answer = parse_yes_no(input);
                record.legal_follow_up.wants_advocate_contact = Some(answer);
                if answer == Answer::Yes {
                    self.state = AdvocateDetails;
                    StepOutcome::Ask(Question::text(
                        "How would you prefer the advocate to reach you?",
                    ))
                } else {
                    self.state = Done;
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            AdvocateDetails => {
                record.legal_follow_up.advocate_details = free_text(input);
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
    fn test_both_declined() {
        let mut record = InterviewRecord::new();
        let mut step = LegalStep::new();

        let (asked, completion) =
            run_step(&mut step, &mut record, &[Some("no"), Some("unsure")]);

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 2);
        assert_eq!(record.legal_follow_up.wants_police_report, Some(Answer::No));
        assert_eq!(
            record.legal_follow_up.wants_advocate_contact,
            Some(Answer::Unsure)
        );
        assert!(record.legal_follow_up.police_report_details.is_none());
        assert!(record.legal_follow_up.advocate_details.is_none());
    }

    #[test]
    fn test_details_on_yes() {
        let mut record = InterviewRecord::new();
        let mut step = LegalStep::new();

        run_step(
            &mut step,
            &mut record,
            &[
                Some("yes"),
                Some("I know who did it"),
                Some("yes"),
                Some("by phone, evenings"),
            ],
        );

        assert_eq!(
            record.legal_follow_up.police_report_details.as_deref(),
            Some("I know who did it")
        );
        assert_eq!(
            record.legal_follow_up.advocate_details.as_deref(),
            Some("by phone, evenings")
        );
    }
}
