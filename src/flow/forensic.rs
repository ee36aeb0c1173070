//! Forensic evidence section
//!
//! Evidence-preservation screens: clothing changes and washing since the
//! incident (details on Yes), and consent to an evidence collection kit.

use crate::answers::{free_text, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForensicState {
    Start,
    ChangedClothes,
    ClothingLocation,
    Washed,
    WashingDetails,
    EvidenceKit,
    Done,
}

/// Resumable forensic-evidence step
#[derive(Debug)]
pub struct ForensicStep {
    state: ForensicState,
}

impl ForensicStep {
    pub fn new() -> Self {
        ForensicStep {
            state: ForensicState::Start,
        }
    }

    fn ask_washed(&mut self) -> StepOutcome {
        self.state = ForensicState::Washed;
        StepOutcome::Ask(Question::yes_no(
            "Have you bathed, showered, or washed since the incident?",
        ))
    }

    fn ask_evidence_kit(&mut self) -> StepOutcome {
        self.state = ForensicState::EvidenceKit;
        StepOutcome::Ask(
            Question::yes_no("Do you consent to an evidence collection kit being used?")
                .with_explanation(
                    "The kit collects physical evidence such as swabs and clothing fibers. \
                     It is your choice, and you can stop it at any point.",
                ),
        )
    }
}

impl Default for ForensicStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for ForensicStep {
    fn name(&self) -> &'static str {
        "forensic_evidence"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use ForensicState::*;

        match self.state {
            Start => {
                self.state = ChangedClothes;
                StepOutcome::Ask(Question::yes_no(
                    "Have you changed clothes since the incident?",
                ))
            }
            ChangedClothes => {
                let answer = parse_yes_no(input);
                record.forensic_evidence.changed_clothes = Some(answer);
                if answer == Answer::Yes {
                    self.state = ClothingLocation;
                    StepOutcome::Ask(Question::text(
                        "Where are the clothes you were wearing?",
                    ))
                } else {
                    self.ask_washed()
                }
            }
            ClothingLocation => {
                record.forensic_evidence.clothing_location = free_text(input);
                self.ask_washed()
            }
            Washed => {
                let answer = parse_yes_no(input);
                record.forensic_evidence.washed_since = Some(answer);
                if answer == Answer::Yes {
                    self.state = WashingDetails;
                    StepOutcome::Ask(Question::text("What did that involve?"))
                } else {
                    self.ask_evidence_kit()
                }
            }
            WashingDetails => {
                record.forensic_evidence.washing_details = free_text(input);
                self.ask_evidence_kit()
            }
            EvidenceKit => {
                record.forensic_evidence.evidence_kit_consent = Some(parse_yes_no(input));
                self.state = Done;
                StepOutcome::Complete(Completion::Continue)
            }
            Done => StepOutcome::Complete(Completion::Continue),
        }
    }
}
