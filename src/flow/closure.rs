//! Closure and support section
//!
//! Final checks before the interview ends: remaining questions, a safe place
//! to go, permission for follow-up contact, and a closing informational turn.

use crate::answers::{free_text, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

const CLOSING_TEXT: &str = "Thank you. The interview is complete. Everything you shared is \
     recorded, and the team here will go through the next steps with you.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClosureState {
    Start,
    RemainingQuestions,
    QuestionDetails,
    SafePlace,
    SafePlaceDetails,
    FollowUp,
    Closing,
    Done,
}

/// Resumable closure step
#[derive(Debug)]
pub struct ClosureStep {
    state: ClosureState,
}

impl ClosureStep {
    pub fn new() -> Self {
        ClosureStep {
            state: ClosureState::Start,
        }
    }

    fn ask_safe_place(&mut self) -> StepOutcome {
        self.state = ClosureState::SafePlace;
        StepOutcome::Ask(Question::yes_no(
            "Do you have a safe place to go after this?",
        ))
    }
}

impl Default for ClosureStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for ClosureStep {
    fn name(&self) -> &'static str {
        "closure_support"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use ClosureState::*;

        match self.state {
            Start => {
                self.state = RemainingQuestions;
                StepOutcome::Ask(Question::yes_no(
                    "Do you have any questions before we finish?",
                ))
            }
            RemainingQuestions => {
                let answer = parse_yes_no(input);
                record.closure_support.has_remaining_questions = Some(answer);
                if answer == Answer::Yes {
                    self.state = QuestionDetails;
                    StepOutcome::Ask(Question::text("What would you like to know?"))
                } else {
                    self.ask_safe_place()
                }
            }
            QuestionDetails => {
                record.closure_support.remaining_questions = free_text(input);
                self.ask_safe_place()
            }
            SafePlace => {
                let answer = parse_yes_no(input);
                record.closure_support.has_safe_place = Some(answer);
                if answer == Answer::Yes {
                    self.state = SafePlaceDetails;
                    StepOutcome::Ask(Question::text("Where will you be staying?"))
                } else {
                    self.state = FollowUp;
                    StepOutcome::Ask(Question::yes_no(
                        "May we contact you for follow-up care?",
                    ))
                }
            }
            SafePlaceDetails => {
                record.closure_support.safe_place_details = free_text(input);
                self.state = FollowUp;
                StepOutcome::Ask(Question::yes_no(
                    "May we contact you for follow-up care?",
                ))
            }
            FollowUp => {
                record.closure_support.agrees_followup_contact = Some(parse_yes_no(input));
                self.state = Closing;
                StepOutcome::Ask(Question::info(CLOSING_TEXT))
            }
            Closing => {
                self.state = Done;
                StepOutcome::Complete(Completion::Continue)
            }
            Done => StepOutcome::Complete(Completion::Continue),
        }
    }
}
