//! ztp-app - Application state and orchestration for the ZTP console
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] runs through [`handler::update`], which mutates
//! [`AppState`] and may hand an [`UpdateAction`] to the action layer. Actions
//! talk to the ZTP service through [`ztp_client::ZtpClient`] on background
//! tasks and report back with more messages.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod editor_state;
pub mod files_state;
pub mod handler;
pub mod input_key;
pub mod log_state;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult, UploadRequest};
pub use input_key::InputKey;
pub use message::Message;
pub use process::{process_message, startup_messages};
pub use state::AppState;
