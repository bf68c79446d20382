//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `editor`: profile editor and profile data handlers
//! - `files`: file panel, upload, prompt and CSV handlers
//! - `log`: provisioning log handlers

use crate::message::Message;
use crate::state::{AppState, Tab};

use super::{editor, files, keys::handle_key, log, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_status();
            UpdateResult::none()
        }

        Message::SwitchTab(tab) => {
            state.tab = tab;
            UpdateResult::none()
        }

        Message::NextTab => {
            state.tab = state.tab.next();
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.tab = state.tab.prev();
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }

        Message::RequestFailed { panel, error } => {
            // Profile loads report through DataLoadFailed
            match panel {
                Tab::Files => state.files.loading = false,
                Tab::Log => state.log.loading = false,
                Tab::Profiles => {}
            }
            editor::show_error(state, error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Profile Editor
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.editor.focus_next(&state.form);
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.editor.focus_prev();
            UpdateResult::none()
        }
        Message::FocusFirst => {
            state.editor.focus_first();
            UpdateResult::none()
        }
        Message::FocusLast => {
            state.editor.focus_last(&state.form);
            UpdateResult::none()
        }

        Message::Activate => editor::handle_activate(state),
        Message::ToggleFocused => editor::handle_toggle_focused(state),
        Message::OpenPicker => editor::handle_open_picker(state),
        Message::InsertEntryBelow => editor::handle_insert_entry_below(state),
        Message::RemoveEntry => editor::handle_remove_entry(state),
        Message::AddStack => editor::handle_add_stack(state),
        Message::RemoveStack => editor::handle_remove_stack(state),

        Message::EditInput(c) => editor::handle_edit_input(state, c),
        Message::EditBackspace => editor::handle_edit_backspace(state),
        Message::EditNewline => editor::handle_edit_newline(state),
        Message::EditCommit => editor::handle_edit_commit(state),
        Message::EditCancel => editor::handle_edit_cancel(state),

        Message::PickerUp => editor::handle_picker_move(state, false),
        Message::PickerDown => editor::handle_picker_move(state, true),
        Message::PickerSelect => editor::handle_picker_select(state),
        Message::PickerCancel => editor::handle_picker_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Profile Data
        // ─────────────────────────────────────────────────────────
        Message::ReloadData => editor::handle_reload_data(state),
        Message::DataLoaded { records } => editor::handle_data_loaded(state, records),
        Message::DataLoadFailed { error } => editor::handle_data_load_failed(state, error),
        Message::SubmitData { export_after } => editor::handle_submit_data(state, export_after),
        Message::DataSaved { export_after } => editor::handle_data_saved(state, export_after),

        // ─────────────────────────────────────────────────────────
        // Files
        // ─────────────────────────────────────────────────────────
        Message::RefreshFiles => files::handle_refresh_files(state),
        Message::FilesLoaded { files: entries } => files::handle_files_loaded(state, entries),
        Message::FileSelectNext => {
            state.files.select_next();
            UpdateResult::none()
        }
        Message::FileSelectPrev => {
            state.files.select_prev();
            UpdateResult::none()
        }
        Message::DeleteFile => files::handle_delete_file(state),
        Message::FileDeleted { name } => files::handle_file_deleted(state, name),
        Message::DownloadFile => files::handle_download_file(state),
        Message::FileDownloaded { path } => {
            state.set_status(format!("Downloaded to {}", path.display()));
            UpdateResult::none()
        }

        Message::UploadProgress { id, percent } => {
            state.files.set_progress(id, percent);
            UpdateResult::none()
        }
        Message::UploadFinished { id } => files::handle_upload_done(state, id, None),
        Message::UploadFailed { id, error } => files::handle_upload_done(state, id, Some(error)),
        Message::UploadCancelled { id } => files::handle_upload_done(state, id, None),
        Message::CancelUpload => files::handle_cancel_upload(state),

        Message::CsvImported => {
            state.set_status("CSV imported");
            UpdateResult::message(Message::ReloadData)
        }
        Message::ExportCsv => files::handle_export_csv(state),
        Message::CsvExported { path } => {
            state.set_status(format!("Exported to {}", path.display()));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Text Prompt
        // ─────────────────────────────────────────────────────────
        Message::StartPrompt(kind) => files::handle_start_prompt(state, kind),
        Message::PromptInput(c) => {
            if let Some(prompt) = &mut state.prompt {
                prompt.buffer.push(c);
            }
            UpdateResult::none()
        }
        Message::PromptBackspace => {
            if let Some(prompt) = &mut state.prompt {
                prompt.buffer.pop();
            }
            UpdateResult::none()
        }
        Message::PromptSubmit => files::handle_prompt_submit(state),
        Message::PromptCancel => files::handle_prompt_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Provisioning Log
        // ─────────────────────────────────────────────────────────
        Message::RefreshLog => log::handle_refresh_log(state),
        Message::LogLoaded { entries } => log::handle_log_loaded(state, entries),
        Message::LogSelectNext => {
            state.log.select_next();
            UpdateResult::none()
        }
        Message::LogSelectPrev => {
            state.log.select_prev();
            UpdateResult::none()
        }
        Message::ToggleLogDetail => {
            state.log.toggle_detail();
            UpdateResult::none()
        }
        Message::ClearLog => UpdateResult::action(UpdateAction::ClearLog),
        Message::LogCleared => log::handle_log_cleared(state),
    }
}
