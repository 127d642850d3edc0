//! TUI state algebra: the model, its inputs, and transition results.
//!
//! The game itself lives in the controller. What is added here is only
//! what a terminal needs on top of it: the event envelope, semantic
//! actions decoupled from raw keys, and the quit flag.

use crossterm::event::KeyEvent;

use crate::controller::GuessController;
use crate::surface::{Focus, TextSurface, Trigger};
use crate::types::{GameConfig, Outcome};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single key reader thread is the only producer.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized. Only triggers a redraw.
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The game, bound to the form the view renders.
    pub game: GuessController<TextSurface>,

    /// Latest outcome that wrote to the form. Drives message styling.
    pub last_outcome: Option<Outcome>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Start a new game on a blank form.
    pub fn new(config: &GameConfig) -> Self {
        App {
            game: GuessController::new(TextSurface::new(), config),
            last_outcome: None,
            should_quit: false,
        }
    }

    /// Wrap an existing controller (fixed targets in tests).
    pub fn with_game(game: GuessController<TextSurface>) -> Self {
        App {
            game,
            last_outcome: None,
            should_quit: false,
        }
    }

    pub fn form(&self) -> &TextSurface {
        self.game.surface()
    }

    pub fn focus(&self) -> Focus {
        self.game.surface().focus
    }

    /// Forward a trigger to the game, remembering what it produced.
    pub fn trigger(&mut self, trigger: Trigger) {
        let outcome = self.game.handle(trigger);
        if outcome != Outcome::Ignored {
            self.last_outcome = Some(outcome);
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// Key mapping depends on focus: the same Enter key is a key press in the
/// entry field but a button activation when the button has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the entry field.
    Insert(char),
    /// Delete the last character of the entry field.
    Erase,
    /// Enter pressed while the entry field has focus.
    EnterKey,
    /// Activate the focused submit button.
    Activate,
    /// Move focus to the other widget.
    FocusNext,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running; redraw.
    Render,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
