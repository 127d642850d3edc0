//! Presentation contract between the game and whatever hosts it.
//!
//! The controller programs against [`Surface`] only. Hosts deliver input
//! as [`Trigger`]s. [`TextSurface`] is the in-memory form both the terminal
//! UI and line mode render from.

// ============================================================================
// CONTRACT
// ============================================================================

/// What the game needs from its host.
///
/// One entry field, one submit control, two write-only text regions.
pub trait Surface {
    /// Current raw content of the entry field.
    fn entry_text(&self) -> String;
    /// Empty the entry field.
    fn clear_entry(&mut self);
    /// Give the entry field input focus.
    fn focus_entry(&mut self);
    /// Write the situational message region (errors, hints, win/loss).
    fn set_message(&mut self, text: &str);
    /// Write the attempts-remaining region.
    fn set_attempts_message(&mut self, text: &str);
    /// Disable the submit control. Further activations become inert.
    fn disable_submit(&mut self);
}

/// A key, as far as the game cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Input delivered by the host. Both variants may lead to a submission;
/// the controller does not care which one fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The submit control was activated.
    SubmitActivated,
    /// A key was pressed while the entry field had focus.
    KeyPressed(Key),
}

// ============================================================================
// IN-MEMORY SURFACE
// ============================================================================

/// Which widget holds input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Entry,
    Submit,
}

/// The whole form as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    pub entry: String,
    pub message: String,
    pub attempts_message: String,
    pub submit_enabled: bool,
    pub focus: Focus,
}

impl Default for TextSurface {
    fn default() -> Self {
        TextSurface {
            entry: String::new(),
            message: String::new(),
            attempts_message: String::new(),
            submit_enabled: true,
            focus: Focus::Entry,
        }
    }
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry content (line mode feeds whole lines this way).
    pub fn set_entry(&mut self, text: &str) {
        self.entry = text.to_string();
    }

    /// Append a typed character to the entry.
    pub fn insert_char(&mut self, c: char) {
        self.entry.push(c);
    }

    /// Remove the last character of the entry, if any.
    pub fn erase_char(&mut self) {
        self.entry.pop();
    }

    /// Move focus to the other widget.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Entry => Focus::Submit,
            Focus::Submit => Focus::Entry,
        };
    }

    /// Activate the submit control.
    ///
    /// Returns the trigger to forward to the controller, or `None` when
    /// the control is disabled.
    pub fn activate_submit(&self) -> Option<Trigger> {
        self.submit_enabled.then_some(Trigger::SubmitActivated)
    }
}

impl Surface for TextSurface {
    fn entry_text(&self) -> String {
        self.entry.clone()
    }

    fn clear_entry(&mut self) {
        self.entry.clear();
    }

    fn focus_entry(&mut self) {
        self.focus = Focus::Entry;
    }

    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn set_attempts_message(&mut self, text: &str) {
        self.attempts_message = text.to_string();
    }

    fn disable_submit(&mut self) {
        self.submit_enabled = false;
    }
}

// ============================================================================
// TESTS
// ============================================================================
