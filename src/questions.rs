//! Question value type surfaced to the caller
//!
//! A `Question` is an immutable description of one prompt: the text to show,
//! how the answer is collected, whether skipping is allowed, optional
//! selectable options, and an optional on-demand explanation. It is never
//! persisted; only the answers it produces are.

use serde::{Deserialize, Serialize};

/// How the caller collects the answer to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// One line of free text, stored verbatim
    Text,
    /// Controlled-choice answer normalized through the Answer vocabulary
    YesNo,
    /// Informational turn: the caller acknowledges it, nothing is recorded
    Info,
}

/// One prompt to surface to the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub kind: QuestionKind,
    /// Whether the operator may skip this question outright
    pub skippable: bool,
    /// Selectable options suggested to the operator (free text still accepted)
    pub options: Option<Vec<String>>,
    /// Explanation surfaced when the subject asks what the question means
    pub explanation: Option<String>,
}

impl Question {
    /// Create a controlled-choice yes/no question
    pub fn yes_no(text: impl Into<String>) -> Self {
        Question {
            text: text.into(),
            kind: QuestionKind::YesNo,
            skippable: true,
            options: None,
            explanation: None,
        }
    }

    /// Create a free-text question
    pub fn text(text: impl Into<String>) -> Self {
        Question {
            text: text.into(),
            kind: QuestionKind::Text,
            skippable: true,
            options: None,
            explanation: None,
        }
    }

    /// Create an informational turn (consumes one interaction, records nothing)
    pub fn info(text: impl Into<String>) -> Self {
        Question {
            text: text.into(),
            kind: QuestionKind::Info,
            skippable: false,
            options: None,
            explanation: None,
        }
    }

    /// Attach suggested options
    pub fn with_options(mut self, options: Vec<&str>) -> Self {
        self.options = Some(options.into_iter().map(str::to_string).collect());
        self
    }

    /// Attach an on-demand explanation
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_question() {
        let q = Question::yes_no("Were weapons used?");
        assert_eq!(q.kind, QuestionKind::YesNo);
        assert!(q.skippable);
        assert!(q.options.is_none());
        assert!(q.explanation.is_none());
    }

    #[test]
    fn test_info_question_not_skippable() {
        let q = Question::info("This interview helps document what happened.");
        assert_eq!(q.kind, QuestionKind::Info);
        assert!(!q.skippable);
    }

    #[test]
    fn test_with_options() {
        let q = Question::text("What is your biological sex?")
            .with_options(vec!["female", "male", "intersex"]);
        assert_eq!(
            q.options,
            Some(vec![
                "female".to_string(),
                "male".to_string(),
                "intersex".to_string()
            ])
        );
    }

    #[test]
    fn test_with_explanation() {
        let q = Question::yes_no("Do you understand the purpose of this interview?")
            .with_explanation("We document injuries and collect evidence you consent to.");
        assert!(q.explanation.unwrap().contains("document"));
    }

    #[test]
    fn test_question_serialization() {
        let q = Question::yes_no("Were there witnesses?");
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
