//! Psychological assessment section
//!
//! Three yes/no screens, each with a detail follow-up only on Yes: safety
//! concerns, counselor referral, and thoughts of self-harm.

use crate::answers::{free_text, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PsychState {
    Start,
    SafetyConcerns,
    SafetyDetails,
    Counselor,
    CounselorPreferences,
    SelfHarm,
    SelfHarmDetails,
    Done,
}

/// Resumable psychological-assessment step
#[derive(Debug)]
pub struct PsychologicalStep {
    state: PsychState,
}

impl PsychologicalStep {
    pub fn new() -> Self {
        PsychologicalStep {
            state: PsychState::Start,
        }
    }

    fn ask_counselor(&mut self) -> StepOutcome {
        self.state = PsychState::Counselor;
        StepOutcome::Ask(Question::yes_no(
            "Would you like to be referred to a counselor or support service?",
        ))
    }

    fn ask_self_harm(&mut self) -> StepOutcome {
        self.state = PsychState::SelfHarm;
        StepOutcome::Ask(Question::yes_no(
            "Have you had any thoughts of harming yourself?",
        ))
    }
}

impl Default for PsychologicalStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for PsychologicalStep {
    fn name(&self) -> &'static str {
        "psychological_assessment"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use PsychState::*;

        match self.state {
            Start => {
                self.state = SafetyConcerns;
                StepOutcome::Ask(Question::yes_no(
                    "Do you have concerns about your safety right now?",
                ))
            }
            SafetyConcerns => {
                let answer = parse_yes_no(input);
                record.psychological_assessment.has_safety_concerns = Some(answer);
                if answer == Answer::Yes {
                    self.state = SafetyDetails;
                    StepOutcome::Ask(Question::text("What are you worried about?"))
                } else {
                    self.ask_counselor()
                }
            }
            SafetyDetails => {
                record.psychological_assessment.safety_concern_details = free_text(input);
                self.ask_counselor()
            }
            Counselor => {
                let answer = parse_yes_no(input);
                record.psychological_assessment.wants_counselor_referral = Some(answer);
                if answer == Answer::Yes {
                    self.state = CounselorPreferences;
                    StepOutcome::Ask(Question::text(
                        "Any preferences for the kind of support you'd like?",
                    ))
                } else {
                    self.ask_self_harm()
                }
            }
            CounselorPreferences => {
                record.psychological_assessment.counselor_preferences = free_text(input);
                self.ask_self_harm()
            }
            SelfHarm => {
                let answer = parse_yes_no(input);
                record.psychological_assessment.has_self_harm_thoughts = Some(answer);
                if answer == Answer::Yes {
                    self.state = SelfHarmDetails;
                    StepOutcome::Ask(Question::text(
                        "Can you tell me more about those thoughts?",
                    ))
                } else {
                    self.state = Done;
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            SelfHarmDetails => {
                record.psychological_assessment.self_harm_details = free_text(input);
                self.state = Done;
                StepOutcome::Complete(Completion::Continue)
            }
            Done => StepOutcome::Complete(Completion::Continue),
        }
    }
}
