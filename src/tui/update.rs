//! State transitions: (App, Action) → Transition.
//!
//! Editing actions touch only the form. Enter and button activation are
//! turned into controller triggers; the controller decides what they mean.
//! Fully testable without a terminal.

use crate::surface::{Key, Trigger};

use super::state::{Action, App, Transition};

/// Apply one action to the app.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Insert(c) => {
            app.game.surface_mut().insert_char(*c);
            // The entry field reports every key press; only Enter submits.
            app.trigger(Trigger::KeyPressed(Key::Char(*c)));
            Transition::Render
        }
        Action::Erase => {
            app.game.surface_mut().erase_char();
            Transition::Render
        }
        Action::EnterKey => {
            app.trigger(Trigger::KeyPressed(Key::Enter));
            Transition::Render
        }
        Action::Activate => {
            if let Some(trigger) = app.game.surface().activate_submit() {
                app.trigger(trigger);
            }
            Transition::Render
        }
        Action::FocusNext => {
            app.game.surface_mut().cycle_focus();
            Transition::Render
        }
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================
