//! Flow controller: the single resumable interview sequence
//!
//! Flattens the eleven section steps into one request/response flow. The only
//! API surface a caller needs is `next_question`: pass the raw answer to the
//! previously returned question (or None on the first call), get back the
//! next `Question`, or None once the session is over.
//!
//! The controller enforces the consent gate: when the consent step completes
//! with Halt, the session is marked terminated and no later step is ever
//! invoked. Terminal states are idempotent.

use tracing::debug;

use crate::errors::{IntakeError, Result};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::closure::ClosureStep;
use super::consent::ConsentStep;
use super::contact::ContactStep;
use super::forensic::ForensicStep;
use super::incident::IncidentStep;
use super::injury::InjuryStep;
use super::intro::IntroStep;
use super::legal::LegalStep;
use super::medical::MedicalStep;
use super::psychological::PsychologicalStep;
use super::treatment::TreatmentStep;
use super::{Completion, SectionStep, StepOutcome};

/// Session lifecycle states; no transition leaves a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    /// All sections visited (terminal)
    Complete,
    /// Consent was denied; later sections permanently skipped (terminal)
    TerminatedNoConsent,
}

impl SessionState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Complete | SessionState::TerminatedNoConsent
        )
    }
}

/// Drives one interview session over an exclusively owned record
pub struct FlowController {
    record: InterviewRecord,
    steps: Vec<Box<dyn SectionStep>>,
    current: usize,
    state: SessionState,
}

impl FlowController {
    /// Create a controller with a fresh record; the record's creation
    /// timestamp is captured here, the instant the session exists.
    pub fn new() -> Self {
        let steps: Vec<Box<dyn SectionStep>> = vec![
            Box::new(IntroStep::new()),
            Box::new(ConsentStep::new()),
            Box::new(MedicalStep::new()),
            Box::new(IncidentStep::new()),
            Box::new(ContactStep::new()),
            Box::new(InjuryStep::new()),
            Box::new(ForensicStep::new()),
            Box::new(TreatmentStep::new()),
            Box::new(PsychologicalStep::new()),
            Box::new(LegalStep::new()),
            Box::new(ClosureStep::new()),
        ];

        FlowController {
            record: InterviewRecord::new(),
            steps,
            current: 0,
            state: SessionState::NotStarted,
        }
    }

    /// Advance the interview by one turn.
    ///
    /// - First call: pass None; begins the session and returns the first
    ///   question.
    /// - Subsequent calls: pass the raw answer to the previously returned
    ///   question; returns the next question, or None once the session is
    ///   over.
    ///
    /// Protocol misuse fails fast: an answer before the first question, or a
    /// non-null answer after termination, is an integration bug and returns
    /// an error without touching the record.
    pub fn next_question(&mut self, answer: Option<&str>) -> Result<Option<Question>> {
        match self.state {
            SessionState::NotStarted => {
                if let Some(answer) = answer {
                    return Err(IntakeError::AnswerBeforeFirstQuestion {
                        answer: answer.to_string(),
                    });
                }
                self.state = SessionState::InProgress;
                debug!(session_id = %self.record.session_id, "interview session started");
                self.advance(None)
            }
            SessionState::InProgress => self.advance(answer),
            SessionState::Complete | SessionState::TerminatedNoConsent => {
                if let Some(answer) = answer {
                    return Err(IntakeError::AnswerAfterTermination {
                        answer: answer.to_string(),
                        state: format!("{:?}", self.state),
                    });
                }
                Ok(None)
            }
        }
    }

    /// Feed the answer to the current step and walk forward until a question
    /// surfaces or the sequence ends. The answer is consumed by the first
    /// step call only; steps entered afterwards start fresh.
    fn advance(&mut self, answer: Option<&str>) -> Result<Option<Question>> {
        let mut input = answer;

        loop {
            let step = &mut self.steps[self.current];
            match step.next(&mut self.record, input) {
                StepOutcome::Ask(question) => return Ok(Some(question)),
                StepOutcome::Complete(Completion::Continue) => {
                    debug!(section = step.name(), "section complete");
                    self.current += 1;
                    input = None;
                    if self.current == self.steps.len() {
                        self.state = SessionState::Complete;
                        debug!(session_id = %self.record.session_id, "interview complete");
                        return Ok(None);
                    }
                }
                StepOutcome::Complete(Completion::Halt) => {
                    self.state = SessionState::TerminatedNoConsent;
                    debug!(
                        session_id = %self.record.session_id,
                        "consent denied, session terminated"
                    );
                    return Ok(None);
                }
            }
        }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Inspect the record at any point; it is always structurally valid
    pub fn record(&self) -> &InterviewRecord {
        &self.record
    }

    /// Take ownership of the record (ends the controller's session)
    pub fn into_record(self) -> InterviewRecord {
        self.record
    }
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}
