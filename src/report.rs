//! User-facing text for game outcomes.
//!
//! Pure functions: Outcome → String. No I/O, no side effects.

use crate::types::{Direction, GUESS_MAX, GUESS_MIN, Outcome, OutputFormat};

// ============================================================================
// MESSAGES
// ============================================================================

/// Message region text for an invalid submission.
pub fn invalid_guess_message() -> String {
    format!("Please enter a valid number between {GUESS_MIN} and {GUESS_MAX}")
}

pub fn won_message() -> String {
    "You won!".to_string()
}

pub fn lost_message(target: u8) -> String {
    format!("Game over! The number was {target}")
}

pub fn hint_message(direction: Direction) -> String {
    match direction {
        Direction::TooHigh => "Too high, try a lower number!".to_string(),
        Direction::TooLow => "Too low, try a higher number!".to_string(),
    }
}

/// Attempts region text.
pub fn attempts_message(attempts_remaining: u8) -> String {
    let noun = if attempts_remaining == 1 { "attempt" } else { "attempts" };
    format!("You have {attempts_remaining} {noun} left")
}

/// Message region text for an outcome, if the outcome writes one.
pub fn outcome_message(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Ignored => None,
        Outcome::Invalid { .. } => Some(invalid_guess_message()),
        Outcome::Won { .. } => Some(won_message()),
        Outcome::Lost { target, .. } => Some(lost_message(*target)),
        Outcome::Hint { direction, .. } => Some(hint_message(*direction)),
    }
}

// ============================================================================
// LINE OUTPUT
// ============================================================================

/// Format an outcome for line mode.
///
/// Human output mirrors what the two UI regions would show. JSON output
/// is one object per outcome, no trailing newline.
pub fn format_outcome(outcome: &Outcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(outcome),
        OutputFormat::Json => format_json(outcome),
    }
}

fn format_human(outcome: &Outcome) -> String {
    let mut out = outcome_message(outcome).unwrap_or_default();
    if let Outcome::Hint { attempts_remaining, .. } = outcome {
        out.push('\n');
        out.push_str(&attempts_message(*attempts_remaining));
    }
    out
}

fn format_json(outcome: &Outcome) -> String {
    serde_json::to_string(outcome).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
}

// ============================================================================
// TESTS
// ============================================================================
