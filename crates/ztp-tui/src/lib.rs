//! ztp-tui - Terminal UI for the ZTP console
//!
//! ratatui rendering of [`ztp_app::AppState`], crossterm event polling and
//! the runner loop tying both to the TEA update cycle.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
