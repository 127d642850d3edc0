//! Pure rendering: map App state to ratatui widgets.
//!
//! One screen. The form (entry, button, two text regions) is read straight
//! from the controller's surface; the last outcome only picks the color.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::surface::{Focus, TextSurface};
use crate::types::{GUESS_MAX, GUESS_MIN, Outcome};

use super::state::App;
use super::theme;

const BUTTON_LABEL: &str = "Guess";
const BUTTON_WIDTH: u16 = 11;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the game to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // spacer
        Constraint::Length(1), // prompt
        Constraint::Length(3), // entry + button
        Constraint::Length(2), // message
        Constraint::Length(1), // attempts
        Constraint::Min(0),    // filler
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_prompt(), chunks[2]);
    render_form_row(app.form(), frame, chunks[3]);
    frame.render_widget(render_message(app), chunks[4]);
    frame.render_widget(render_attempts(app.form()), chunks[5]);
    frame.render_widget(render_help(app.form()), chunks[7]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("guess-number", theme::STYLE_TITLE)))
}

fn render_prompt() -> Paragraph<'static> {
    Paragraph::new(format!(
        "  Guess a number between {GUESS_MIN} and {GUESS_MAX}"
    ))
}

/// Help line showing available keybindings.
fn render_help(form: &TextSurface) -> Paragraph<'static> {
    let help_text = match (form.submit_enabled, form.focus) {
        (false, _) => "[Esc] quit",
        (true, Focus::Entry) => "[Enter] guess  [Tab] button  [Esc] quit",
        (true, Focus::Submit) => "[Enter/Space] guess  [Tab] entry  [Esc] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// FORM
// ============================================================================

fn border_style(focused: bool) -> Style {
    if focused {
        theme::STYLE_FOCUSED
    } else {
        theme::STYLE_UNFOCUSED
    }
}

fn render_form_row(form: &TextSurface, frame: &mut Frame, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(2),            // indent
        Constraint::Min(8),               // entry
        Constraint::Length(1),            // gap
        Constraint::Length(BUTTON_WIDTH), // button
    ])
    .split(area);

    let entry_focused = form.focus == Focus::Entry;
    let entry = Paragraph::new(form.entry.as_str())
        .block(Block::bordered().border_style(border_style(entry_focused)));
    frame.render_widget(entry, chunks[1]);

    if entry_focused {
        let inner_width = chunks[1].width.saturating_sub(2);
        let offset = cursor_offset(&form.entry, inner_width);
        frame.set_cursor_position((chunks[1].x + 1 + offset, chunks[1].y + 1));
    }

    let label_style = if form.submit_enabled {
        theme::STYLE_BUTTON
    } else {
        theme::STYLE_BUTTON_DISABLED
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {BUTTON_LABEL} "),
        label_style,
    )))
    .centered()
    .block(Block::bordered().border_style(border_style(form.focus == Focus::Submit)));
    frame.render_widget(button, chunks[3]);
}

/// Cursor column inside the entry box, clamped to its last cell.
fn cursor_offset(entry: &str, inner_width: u16) -> u16 {
    let typed = u16::try_from(entry.chars().count()).unwrap_or(u16::MAX);
    typed.min(inner_width.saturating_sub(1))
}

fn message_style(outcome: Option<&Outcome>) -> Style {
    match outcome {
        Some(Outcome::Won { .. }) => theme::STYLE_WON,
        Some(Outcome::Lost { .. }) | Some(Outcome::Invalid { .. }) => theme::STYLE_DANGER,
        Some(Outcome::Hint { .. }) => theme::STYLE_HINT,
        Some(Outcome::Ignored) | None => Style::new(),
    }
}

fn render_message(app: &App) -> Paragraph<'_> {
    let style = message_style(app.last_outcome.as_ref());
    Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(app.form().message.as_str(), style),
    ]))
    .wrap(Wrap { trim: false })
}

fn render_attempts(form: &TextSurface) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(form.attempts_message.as_str(), theme::STYLE_IMPORTANT),
    ]))
}

// ============================================================================
// TESTS
// ============================================================================
