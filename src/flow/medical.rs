//! Medical history section
//!
//! Medications, allergies and existing conditions are always asked.
//! Menstrual and pregnancy questions are asked only when the recorded age is
//! unset or at least twelve — the gate reads `Consent.age`, which an earlier
//! step wrote (or left unset if the subject declined it).

use crate::answers::{free_text, parse_yes_no};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

/// Minimum age for the menstrual/pregnancy questions; unset age also passes
const MENSTRUAL_MIN_AGE: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MedicalState {
    Start,
    Medications,
    Allergies,
    Conditions,
    MenstrualPeriod,
    PregnancyHistory,
    CurrentlyPregnant,
    Done,
}

/// Resumable medical-history step
#[derive(Debug)]
pub struct MedicalStep {
    state: MedicalState,
}

impl MedicalStep {
    pub fn new() -> Self {
        MedicalStep {
            state: MedicalState::Start,
        }
    }

    fn age_gate_open(record: &InterviewRecord) -> bool {
        record
            .consent
            .age
            .map_or(true, |age| age >= MENSTRUAL_MIN_AGE)
    }
}

impl Default for MedicalStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for MedicalStep {
    fn name(&self) -> &'static str {
        "medical_history"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use MedicalState::*;

        match self.state {
            Start => {
                self.state = Medications;
                StepOutcome::Ask(Question::text(
                    "Are you currently taking any medications? If so, which?",
                ))
            }
            Medications => {
                record.medical_history.current_medications = free_text(input);
                self.state = Allergies;
                StepOutcome::Ask(Question::text("Do you have any allergies?"))
            }
            Allergies => {
                record.medical_history.allergies = free_text(input);
                self.state = Conditions;
                StepOutcome::Ask(Question::text(
                    "Do you have any existing medical conditions?",
                ))
            }
            Conditions => {
                record.medical_history.existing_conditions = free_text(input);
                if Self::age_gate_open(record) {
                    self.state = MenstrualPeriod;
                    StepOutcome::Ask(Question::text(
                        "When was your last menstrual period?",
                    ))
                } else {
                    self.state = Done;
                    StepOutcome::Complete(Completion::Continue)
                }
            }
            MenstrualPeriod => {
                record.medical_history.last_menstrual_period = free_text(input);
                self.state = PregnancyHistory;
                StepOutcome::Ask(Question::text(
                    "Have you been pregnant before? Please describe.",
                ))
            }
            PregnancyHistory => {
                record.medical_history.pregnancy_history = free_text(input);
                self.state = CurrentlyPregnant;
                StepOutcome::Ask(Question::yes_no("Are you currently pregnant?"))
            }
            CurrentlyPregnant => {
                record.medical_history.currently_pregnant = Some(parse_yes_no(input));
                self.state = Done;
                StepOutcome::Complete(Completion::Continue)
            }
            Done => StepOutcome::Complete(Completion::Continue),
        }
    }
}
