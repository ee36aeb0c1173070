//! intakeflow - Structured intake interview engine
//!
//! A resumable, branching structured-interview engine for forensic nursing
//! intake: a controller walks an operator through a fixed multi-section
//! questionnaire one question at a time, records every answer into a single
//! structured record, and alters which questions come next based on answers
//! already given (age-gated questions, consent-gated sections, conditional
//! follow-ups).
//!
//! # Architecture
//!
//! - `answers` / `questions` / `record`: the value types
//! - `flow`: the eleven resumable section steps and the `FlowController`
//! - `runner` / `cli` / `export` / `reference`: the terminal periphery

pub mod errors;

pub mod answers;
pub mod questions;
pub mod record;

pub mod flow;

// Terminal periphery
pub mod cli;
pub mod export;
pub mod reference;
pub mod runner;

// Re-export commonly used types
pub use answers::{parse_yes_no, Answer};
pub use errors::{IntakeError, Result};
pub use flow::{FlowController, SessionState};
pub use questions::{Question, QuestionKind};
pub use record::InterviewRecord;
