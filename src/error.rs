//! Guess validation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The trimmed input is not a base-10 integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// A number, but outside the playable range.
    #[error("{0} is outside 1..=100")]
    OutOfRange(i64),
}
