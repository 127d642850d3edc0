//! Domain types for guess-number.
//!
//! Constants of the game, the outcome algebra, and run configuration.

use serde::{Serialize, Serializer};

use crate::error::GuessError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest value the secret number (and any valid guess) can take.
pub const GUESS_MIN: u8 = 1;

/// Largest value the secret number (and any valid guess) can take.
pub const GUESS_MAX: u8 = 100;

/// Attempts granted to every session.
pub const MAX_ATTEMPTS: u8 = 5;

/// Tracing target for the developer-facing diagnostic channel.
pub const DIAGNOSTICS_TARGET: &str = "guess_number::diagnostics";

// ============================================================================
// ENUMS
// ============================================================================

/// Lifecycle of a session. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Over,
}

/// Which way a wrong guess missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Guess was above the target.
    TooHigh,
    /// Guess was below the target.
    TooLow,
}

/// What a single submission produced.
///
/// Terminal states of one `submit_guess` call. Hosts may format or log
/// these; the surface has already been updated by the time one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Session already over: nothing happened.
    Ignored,
    /// Input rejected. No attempt consumed.
    Invalid {
        input: String,
        #[serde(serialize_with = "serialize_display")]
        reason: GuessError,
    },
    /// Correct guess.
    Won { guess: u8, attempts_remaining: u8 },
    /// Budget exhausted on a wrong guess. Reveals the target.
    Lost { guess: u8, target: u8 },
    /// Wrong guess, attempts still left.
    Hint {
        guess: u8,
        direction: Direction,
        attempts_remaining: u8,
    },
}

/// Serialize an error as its display string.
fn serialize_display<S>(err: &GuessError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(err)
}

impl Outcome {
    /// True for the two outcomes that end a session.
    pub fn ends_session(&self) -> bool {
        matches!(self, Outcome::Won { .. } | Outcome::Lost { .. })
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for line mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The same messages the UI would show.
    #[default]
    Human,
    /// One JSON object per outcome.
    Json,
}

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Emit the secret number on the diagnostic channel at construction.
    pub diagnostics_enabled: bool,
    /// Seed for the target RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

// ============================================================================
// TESTS
// ============================================================================
