//! Resumable section flows
//!
//! Each interview section is an explicit resumable step object: a struct
//! holding a small per-section state enum, advanced by `next(record, input)`.
//! The originally coroutine-shaped control flow becomes a plain state machine
//! with one suspension point per question.
//!
//! Protocol per step:
//! 1. `next` produces the next `Question` and suspends (returns).
//! 2. The following call supplies the raw answer to that exact question.
//! 3. The step normalizes the answer and writes it into the record.
//! 4. Branching is purely a function of fields already set in the record.
//!
//! A step never fails on bad input; it degrades via the parser's
//! default-Decline behavior and continues.

pub mod closure;
pub mod consent;
pub mod contact;
pub mod controller;
pub mod forensic;
pub mod incident;
pub mod injury;
pub mod intro;
pub mod legal;
pub mod medical;
pub mod psychological;
pub mod treatment;

pub use controller::{FlowController, SessionState};

use crate::questions::Question;
use crate::record::InterviewRecord;

/// Completion signal handed back when a step finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Hand control to the next section
    Continue,
    /// Do not proceed: the whole session must terminate (consent denied)
    Halt,
}

/// Result of advancing a step by one turn
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Surface this question and suspend until its answer arrives
    Ask(Question),
    /// The section is finished
    Complete(Completion),
}

/// One cooperative section sub-flow
pub trait SectionStep {
    /// Section name used in trace events
    fn name(&self) -> &'static str;

    /// Advance by one turn. `input` is the raw answer to the previously
    /// returned question, or None on the step's first turn (and for Info
    /// acknowledgments, where any input is ignored).
    ///
    /// Once a step has returned `Complete`, further calls keep returning the
    /// same completion without touching the record.
    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome;
}
