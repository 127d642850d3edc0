//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the state, update
//! and view layers to the real terminal via crossterm and ratatui.
//!
//! A key reader thread forwards crossterm events over an mpsc channel; the
//! event loop consumes them one at a time, so every submission runs to
//! completion before the next key is looked at.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::surface::Focus;
use crate::types::GameConfig;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// What a key means depends on which widget has focus.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match (key.code, focus) {
        (KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::FocusNext),

        // Entry field
        (KeyCode::Enter, Focus::Entry) => Some(Action::EnterKey),
        (KeyCode::Backspace, Focus::Entry) => Some(Action::Erase),
        (KeyCode::Char(c), Focus::Entry) if !c.is_control() => Some(Action::Insert(c)),

        // Submit button
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Submit) => Some(Action::Activate),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INPUT THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                // Windows reports releases too; only presses count.
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()), // ignore mouse, focus, paste
                Err(_) => break,
            };
            if forwarded.is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run one game in the terminal until the user quits.
///
/// The game starts as soon as the terminal is ready. After the session is
/// over the screen stays up, locked, until Esc or Ctrl+C.
pub fn run(config: &GameConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // reader thread gone
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key, app.focus()) {
                    debug!(?action, "key action");
                    if update(&mut app, &action) == Transition::Quit {
                        app.should_quit = true;
                    }
                }
            }
            AppEvent::Resize => {} // redraw on next iteration
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
