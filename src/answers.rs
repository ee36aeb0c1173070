//! Answer normalization for controlled-choice questions
//!
//! `parse_yes_no` is a total function: every raw string (or its absence) maps
//! to exactly one variant of the closed `Answer` vocabulary, with `Decline`
//! as the default arm. Ambiguous or refused input must never block forward
//! progress of a trauma-sensitive interview, so uncertainty is treated as an
//! implicit right to decline rather than as invalid input.
//!
//! Free-text questions bypass this module and store the raw string verbatim;
//! bounded numeric values (age, pain rating, headcount) are parsed
//! best-effort and simply left unset on failure.

use serde::{Deserialize, Serialize};

/// Closed vocabulary for all controlled-choice questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    Unsure,
    /// Declined to answer, or the answer could not be interpreted
    Decline,
    /// Asked for an explanation of the question
    Explain,
}

impl Answer {
    /// Whether this answer affirms the question
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Normalize a raw yes/no answer into the closed vocabulary.
///
/// Case-insensitive lookup with one default arm:
/// - `y`, `yes` → Yes
/// - `n`, `no` → No
/// - `u`, `unsure`, `not sure` → Unsure
/// - `explain` → Explain
/// - `skip`, empty, absent, or anything unrecognized → Decline
///
/// Never fails; always returns a value.
pub fn parse_yes_no(raw: Option<&str>) -> Answer {
    let token = match raw {
        Some(s) => s.trim().to_lowercase(),
        None => return Answer::Decline,
    };

    match token.as_str() {
        "y" | "yes" => Answer::Yes,
        "n" | "no" => Answer::No,
        "u" | "unsure" | "not sure" => Answer::Unsure,
        "explain" => Answer::Explain,
        // "skip", "", and every unrecognized token fall through here
        _ => Answer::Decline,
    }
}

/// Capture a free-text answer verbatim, or None when empty.
pub fn free_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Best-effort parse of a bounded small integer (e.g. age, pain rating).
///
/// Returns None on absent, unparseable, or out-of-range input.
pub fn parse_bounded_u8(raw: Option<&str>, max: u8) -> Option<u8> {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|v| *v <= max)
}

/// Best-effort parse of a non-negative count (e.g. witness headcount).
pub fn parse_count(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
}
