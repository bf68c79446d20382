//! Custom widget components

mod dialogs;
mod files_panel;
mod header;
mod log_panel;
pub mod modal_overlay;
mod profile_editor;
mod status_bar;

pub use dialogs::{AlertDialog, ConfirmDialog, PickerDialog, PromptDialog};
pub use files_panel::FilesPanel;
pub use header::MainHeader;
pub use log_panel::LogPanel;
pub use profile_editor::ProfileEditor;
pub use status_bar::{hints_for, StatusBar};
