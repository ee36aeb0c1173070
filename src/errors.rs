//! Error types for the intakeflow interview engine
//!
//! Input ambiguity is never an error anywhere in this crate: unparseable or
//! refused answers resolve to `Answer::Decline` or leave a field unset. The
//! variants here cover protocol misuse by the caller and the periphery
//! (config, export, reference client) only.

use thiserror::Error;

/// Main error type for the interview engine and its periphery
#[derive(Error, Debug)]
pub enum IntakeError {
    /// An answer was supplied before the first question was ever issued
    #[error("Protocol violation: answer {answer:?} supplied before the first question was issued")]
    AnswerBeforeFirstQuestion { answer: String },

    /// A non-null answer was supplied after the session reached a terminal state
    #[error("Protocol violation: answer {answer:?} supplied after session terminated ({state})")]
    AnswerAfterTermination { answer: String, state: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ollama API errors (reference generation)
    #[error("Ollama API error: {0}")]
    ApiError(String),

    /// Streaming errors (reference generation)
    #[error("Streaming error: {0}")]
    StreamingError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors (record export)
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for interview operations
pub type Result<T> = std::result::Result<T, IntakeError>;
