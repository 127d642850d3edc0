//! guess-number: find the secret number between 1 and 100 in five attempts.

pub mod controller;
pub mod error;
pub mod line;
pub mod report;
pub mod session;
pub mod surface;
pub mod tui;
pub mod types;
