//! TUI module for the interactive terminal game.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: App model, actions, events
//! - `update`: action → controller/form transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, input thread, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
