//! ZTP Console Library
//!
//! Terminal console for a zero-touch-provisioning configuration service:
//! an interactive profile editor plus scriptable headless subcommands.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_command;
pub use headless::Command;
pub use ztp_tui::run;
