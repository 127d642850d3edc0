//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: won
//! - Red: lost, invalid input
//! - Yellow: hints
//! - Cyan: focused / interactive elements
//! - Dim: help line, disabled button

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// MESSAGE STYLES
// ============================================================================

/// Winning message.
pub const STYLE_WON: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Losing message and input errors.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Too high / too low.
pub const STYLE_HINT: Style = Style::new().fg(Color::Yellow);

/// Attempts counter.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the focused widget.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border of an unfocused widget.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Enabled submit button.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Disabled submit button.
pub const STYLE_BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
