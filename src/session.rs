//! Game session: the one piece of mutable game state.
//!
//! Pure data and pure transitions. No surface, no I/O. The controller
//! drives this and mirrors every result onto its surface.

use rand::Rng;

use crate::error::GuessError;
use crate::types::{Direction, GUESS_MAX, GUESS_MIN, MAX_ATTEMPTS, Outcome, Phase};

/// Parse raw entry text into a guess.
///
/// Surrounding whitespace is ignored. The leading integer is read (optional
/// sign, then base-10 digits) and anything after it is dropped, so `"4.5"`
/// is 4 and `"70 apples"` is 70. Input with no leading digits is not a
/// number; a number outside `GUESS_MIN..=GUESS_MAX` is out of range.
pub fn parse_guess(raw: &str) -> Result<u8, GuessError> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(GuessError::NotANumber(trimmed.to_string()));
    }

    let digits = &unsigned[..digits_len];
    let value: i64 = match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        // Too many digits for i64: out of range either way.
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };

    if value < i64::from(GUESS_MIN) || value > i64::from(GUESS_MAX) {
        return Err(GuessError::OutOfRange(value));
    }

    // In range, so the narrowing cannot fail.
    Ok(value as u8)
}

/// One play-through: the secret number and what is left of the budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: u8,
    attempts_remaining: u8,
    phase: Phase,
}

impl GameSession {
    /// Start a session with a target drawn uniformly from `GUESS_MIN..=GUESS_MAX`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new_unchecked(rng.random_range(GUESS_MIN..=GUESS_MAX))
    }

    /// Start a session with a fixed target.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the target is not a playable number.
    pub fn with_target(target: u8) -> Result<Self, GuessError> {
        if !(GUESS_MIN..=GUESS_MAX).contains(&target) {
            return Err(GuessError::OutOfRange(i64::from(target)));
        }
        Ok(Self::new_unchecked(target))
    }

    fn new_unchecked(target: u8) -> Self {
        GameSession {
            target,
            attempts_remaining: MAX_ATTEMPTS,
            phase: Phase::Active,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Mark the session finished. Idempotent.
    pub fn finish(&mut self) {
        self.phase = Phase::Over;
    }

    /// Evaluate one raw submission against the session.
    ///
    /// Invalid input leaves the session untouched. A valid guess consumes
    /// one attempt before it is compared, so a correct guess on the last
    /// attempt still wins. Win or loss moves the session to `Over`.
    pub fn evaluate(&mut self, raw: &str) -> Outcome {
        if self.is_over() {
            return Outcome::Ignored;
        }

        let guess = match parse_guess(raw) {
            Ok(g) => g,
            Err(reason) => {
                return Outcome::Invalid {
                    input: raw.to_string(),
                    reason,
                };
            }
        };

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        if guess == self.target {
            self.finish();
            Outcome::Won {
                guess,
                attempts_remaining: self.attempts_remaining,
            }
        } else if self.attempts_remaining == 0 {
            self.finish();
            Outcome::Lost {
                guess,
                target: self.target,
            }
        } else {
            let direction = if guess > self.target {
                Direction::TooHigh
            } else {
                Direction::TooLow
            };
            Outcome::Hint {
                guess,
                direction,
                attempts_remaining: self.attempts_remaining,
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
