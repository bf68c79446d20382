//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `editor`: Profile editor and profile data handlers
//! - `files`: File panel, uploads and CSV handlers
//! - `log`: Provisioning log handlers

pub(crate) mod editor;
pub(crate) mod files;
pub(crate) mod keys;
pub(crate) mod log;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use tokio::sync::oneshot;

use crate::config::Settings;
use crate::message::Message;
use ztp_core::ProfileList;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// One file upload handed to the action layer
#[derive(Debug)]
pub struct UploadRequest {
    pub id: u64,
    pub path: PathBuf,
    /// Fires when the user cancels this upload
    pub cancel: oneshot::Receiver<()>,
}

/// Actions that the event loop should perform after update
#[derive(Debug)]
pub enum UpdateAction {
    /// GET /data
    LoadData,

    /// POST /data with the reconstructed profile list
    SubmitData {
        data: ProfileList,
        export_after: bool,
    },

    /// GET /list
    ListFiles,

    /// POST /file, one task per upload
    UploadFiles {
        folder: String,
        uploads: Vec<UploadRequest>,
    },

    /// DELETE /file/{name}
    DeleteFile { name: String },

    /// GET /file/{name} into `dest_dir`
    DownloadFile { name: String, dest_dir: PathBuf },

    /// POST /csv
    ImportCsv { path: PathBuf },

    /// GET /csv into `dest`
    ExportCsv { dest: PathBuf },

    /// GET /log
    GetLog,

    /// DELETE /log
    ClearLog,

    /// Persist settings to the config file
    SaveSettings { path: PathBuf, settings: Settings },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
