//! Terminal caller loop for the interview engine
//!
//! The engine itself is UI-free; this module is the caller described at its
//! interface boundary: it repeatedly calls `next_question`, displays the
//! question text (waiting for a bare acknowledgment on Info turns), collects
//! one line of raw input for Text/YesNo questions, and feeds it back in.

use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::flow::{FlowController, SessionState};
use crate::questions::{Question, QuestionKind};
use crate::record::InterviewRecord;

/// How the operator ended their turn
enum LineRead {
    Line(String),
    Eof,
}

/// Interactive interview runner over a terminal
pub struct InterviewRunner {
    editor: DefaultEditor,
    prompt: String,
}

impl InterviewRunner {
    pub fn new() -> Result<Self> {
        Ok(InterviewRunner {
            editor: DefaultEditor::new()?,
            prompt: "> ".to_string(),
        })
    }

    /// Show the session banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", format!("  intakeflow {} - Structured Intake Interview", version).bold().cyan());
        println!("{}", "  Answers: yes / no / unsure / explain / skip (or free text)".dimmed());
        println!("{}\n", "=".repeat(width).cyan());
    }

    /// Run one full interview session; returns the record in whatever state
    /// the session ended (complete, consent-denied, or abandoned via EOF).
    pub fn run(&mut self, mut controller: FlowController) -> Result<InterviewRecord> {
        let mut answer: Option<String> = None;

        loop {
            let question = match controller.next_question(answer.as_deref())? {
                Some(q) => q,
                None => break,
            };

            answer = match self.present(&question)? {
                LineRead::Line(line) => Some(line),
                // Operator stopped the session; the record is valid as-is
                LineRead::Eof => {
                    println!("\n{}", "Session stopped by operator.".yellow());
                    return Ok(controller.into_record());
                }
            };
        }

        match controller.state() {
            SessionState::TerminatedNoConsent => {
                println!("{}", "Consent was not given; the interview has ended.".yellow());
            }
            SessionState::Complete => {
                println!("{}", "Interview complete.".green());
            }
            _ => {}
        }

        Ok(controller.into_record())
    }

    /// Display one question and collect the raw operator input for it
    fn present(&mut self, question: &Question) -> Result<LineRead> {
        println!();
        match question.kind {
            QuestionKind::Info => {
                println!("{}", question.text.cyan());
                println!("{}", "(press Enter to continue)".dimmed());
                // The acknowledgment itself carries no information
                match self.read_line()? {
                    LineRead::Eof => Ok(LineRead::Eof),
                    LineRead::Line(_) => Ok(LineRead::Line(String::new())),
                }
            }
            QuestionKind::YesNo => {
                println!("{}", question.text.bold());
                if question.explanation.is_some() {
                    println!("{}", "(answer 'explain' to hear more)".dimmed());
                }
                self.maybe_explain(question)
            }
            QuestionKind::Text => {
                println!("{}", question.text.bold());
                if let Some(ref options) = question.options {
                    println!("{}", format!("  e.g. {}", options.join(" / ")).dimmed());
                }
                self.read_line()
            }
        }
    }

    /// Read one answer; when the operator types "explain" and the question
    /// carries an explanation, surface it and re-read. When it does not, the
    /// raw "explain" token goes to the engine as-is.
    fn maybe_explain(&mut self, question: &Question) -> Result<LineRead> {
        loop {
            match self.read_line()? {
                LineRead::Line(line) => {
                    if line.trim().eq_ignore_ascii_case("explain") {
                        if let Some(ref explanation) = question.explanation {
                            println!("{}", explanation.cyan());
                            continue;
                        }
                    }
                    return Ok(LineRead::Line(line));
                }
                LineRead::Eof => return Ok(LineRead::Eof),
            }
        }
    }

    fn read_line(&mut self) -> Result<LineRead> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(LineRead::Line(trimmed.to_string()))
            }
            // Ctrl-D and Ctrl-C both end the session gracefully; the record
            // stays valid because every write already happened atomically
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(LineRead::Eof),
            Err(err) => Err(anyhow::anyhow!("readline error: {}", err)),
        }
    }
}
