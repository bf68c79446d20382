//! File panel handlers: listing, uploads, downloads, CSV and the text prompt

use std::path::{Path, PathBuf};

use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppState, PromptKind, PromptState, UiMode};
use ztp_client::EXPORT_FILE_NAME;
use ztp_core::FileEntry;

use super::editor::show_error;
use super::{UpdateAction, UpdateResult, UploadRequest};

pub fn handle_refresh_files(state: &mut AppState) -> UpdateResult {
    state.files.loading = true;
    UpdateResult::action(UpdateAction::ListFiles)
}

/// New listing: refresh the panel and every combo picker
pub fn handle_files_loaded(state: &mut AppState, entries: Vec<FileEntry>) -> UpdateResult {
    debug!("Listed {} files", entries.len());
    state.files.set_entries(entries);
    let names = state.files.names();
    state.form.sync_suggestions(&names);
    UpdateResult::none()
}

pub fn handle_delete_file(state: &mut AppState) -> UpdateResult {
    match state.files.selected_file() {
        Some(entry) => UpdateResult::action(UpdateAction::DeleteFile {
            name: entry.file.clone(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_file_deleted(state: &mut AppState, name: String) -> UpdateResult {
    state.files.remove_entry(&name);
    let names = state.files.names();
    state.form.sync_suggestions(&names);
    state.set_status(format!("Deleted {}", name));
    UpdateResult::none()
}

pub fn handle_download_file(state: &mut AppState) -> UpdateResult {
    match state.files.selected_file() {
        Some(entry) => UpdateResult::action(UpdateAction::DownloadFile {
            name: entry.file.clone(),
            dest_dir: state.settings.files.download_dir.clone(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_export_csv(state: &mut AppState) -> UpdateResult {
    UpdateResult::action(UpdateAction::ExportCsv {
        dest: state.settings.files.download_dir.join(EXPORT_FILE_NAME),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Uploads
// ─────────────────────────────────────────────────────────────────────────────

/// Fire the cancel handle of the selected upload
pub fn handle_cancel_upload(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.files.selected_upload().map(|u| u.id) else {
        return UpdateResult::none();
    };
    if let Some(cancel) = state.upload_cancels.remove(&id) {
        debug!("Cancelling upload {}", id);
        // The task may already be done; its own result message still arrives
        let _ = cancel.send(());
    }
    UpdateResult::none()
}

/// An upload ended, successfully or not. Drops its progress row and
/// reloads the listing once no uploads remain.
pub fn handle_upload_done(state: &mut AppState, id: u64, error: Option<String>) -> UpdateResult {
    state.upload_cancels.remove(&id);
    if let Some(row) = state.files.finish_upload(id) {
        match &error {
            Some(_) => debug!("Upload of {} failed", row.name),
            None => info!("Upload of {} ended", row.name),
        }
    }
    if let Some(error) = error {
        show_error(state, error);
    }

    if state.files.has_uploads() {
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::RefreshFiles)
    }
}

fn upload_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn start_uploads(state: &mut AppState, input: &str) -> UpdateResult {
    let uploads: Vec<UploadRequest> = split_paths(input)
        .into_iter()
        .map(|path| {
            let id = state.files.start_upload(upload_display_name(&path));
            let (cancel_tx, cancel_rx) = oneshot::channel();
            state.upload_cancels.insert(id, cancel_tx);
            UploadRequest {
                id,
                path,
                cancel: cancel_rx,
            }
        })
        .collect();

    if uploads.is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::UploadFiles {
        folder: state.settings.files.upload_folder.clone(),
        uploads,
    })
}

/// Split prompt input into paths on whitespace. Single or double quotes
/// keep spaces inside one path.
fn split_paths(input: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut started = false;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                started = true;
            }
            None if c.is_whitespace() => {
                if started {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                    started = false;
                }
            }
            None => {
                current.push(c);
                started = true;
            }
        }
    }
    if started {
        paths.push(PathBuf::from(current));
    }
    paths.retain(|p| !p.as_os_str().is_empty());
    paths
}

// ─────────────────────────────────────────────────────────────────────────────
// Text prompt
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_start_prompt(state: &mut AppState, kind: PromptKind) -> UpdateResult {
    let buffer = match kind {
        PromptKind::UploadFolder => state.settings.files.upload_folder.clone(),
        PromptKind::UploadPaths | PromptKind::ImportCsv => String::new(),
    };
    state.prompt = Some(PromptState { kind, buffer });
    state.ui_mode = UiMode::Prompt;
    UpdateResult::none()
}

pub fn handle_prompt_cancel(state: &mut AppState) -> UpdateResult {
    state.prompt = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_prompt_submit(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let Some(prompt) = state.prompt.take() else {
        return UpdateResult::none();
    };
    let input = prompt.buffer.trim();

    match prompt.kind {
        PromptKind::UploadPaths => start_uploads(state, input),
        PromptKind::UploadFolder => {
            state.settings.files.upload_folder = input.to_string();
            state.set_status(format!("Upload folder: {}", display_folder(input)));
            match &state.config_path {
                Some(path) => UpdateResult::action(UpdateAction::SaveSettings {
                    path: path.clone(),
                    settings: state.settings.clone(),
                }),
                None => UpdateResult::none(),
            }
        }
        PromptKind::ImportCsv => {
            if input.is_empty() {
                return UpdateResult::none();
            }
            UpdateResult::action(UpdateAction::ImportCsv {
                path: PathBuf::from(input),
            })
        }
    }
}

fn display_folder(folder: &str) -> &str {
    if folder.is_empty() {
        "(root)"
    } else {
        folder
    }
}
