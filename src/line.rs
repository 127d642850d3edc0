//! Line mode: play on plain stdin/stdout.
//!
//! Each input line is typed into the entry field and followed by an
//! Enter key press, exactly as the terminal UI would deliver it. The
//! outcome of every line is written out in the requested format.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::controller::GuessController;
use crate::report::format_outcome;
use crate::surface::{Key, TextSurface, Trigger};
use crate::types::{GUESS_MAX, GUESS_MIN, MAX_ATTEMPTS, Outcome, OutputFormat};

/// Play one game reading guesses from `input`, writing feedback to `output`.
///
/// Returns when the session is over or `input` is exhausted.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn play<R: BufRead, W: Write>(
    game: &mut GuessController<TextSurface>,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Human {
        writeln!(
            output,
            "Guess a number between {GUESS_MIN} and {GUESS_MAX}. You have {MAX_ATTEMPTS} attempts."
        )?;
        output.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        game.surface_mut().set_entry(&line);
        let outcome = game.handle(Trigger::KeyPressed(Key::Enter));

        // Enter on a finished game is the only way to get Ignored.
        if outcome == Outcome::Ignored {
            break;
        }

        writeln!(output, "{}", format_outcome(&outcome, format))?;
        output.flush()?;

        if outcome.ends_session() {
            break;
        }
    }

    if !game.session().is_over() {
        debug!(
            attempts_remaining = game.session().attempts_remaining(),
            "input closed before the game ended"
        );
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
