//! Tests for handler module

use std::path::PathBuf;

use serde_json::json;

use super::*;
use crate::editor_state::FocusTarget;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, PromptKind, Tab, UiMode};
use ztp_core::{Field, FileEntry, KeyValueColumn, LogEntry, ProfileList, Widget};

/// Run a message and every follow-up message, collecting the actions
fn send(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, keys: &[InputKey]) -> Vec<UpdateAction> {
    keys.iter()
        .flat_map(|key| send(state, Message::Key(*key)))
        .collect()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Message::Key(InputKey::Char(c)));
    }
}

fn records(value: serde_json::Value) -> ProfileList {
    serde_json::from_value(value).unwrap()
}

fn loaded(value: serde_json::Value) -> AppState {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::DataLoaded {
            records: records(value),
        },
    );
    state
}

fn focus(state: &mut AppState, target: FocusTarget) {
    assert!(state.editor.focus_on(&state.form, target), "no {target:?}");
}

fn text_of(state: &AppState, index: usize, field: Field) -> Option<String> {
    state
        .form
        .group(index)
        .and_then(|g| g.widget(field))
        .and_then(Widget::text)
        .map(str::to_string)
}

fn file(name: &str) -> FileEntry {
    FileEntry {
        file: name.to_string(),
        size: "1".to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let mut state = AppState::new();
    for mode in [
        UiMode::Normal,
        UiMode::Editing,
        UiMode::Picker,
        UiMode::Prompt,
        UiMode::Alert,
        UiMode::ConfirmDialog,
    ] {
        state.ui_mode = mode;
        assert!(
            matches!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit)),
            "{mode:?}"
        );
    }
}

#[test]
fn test_quit_with_unsaved_edits_asks_first() {
    let mut state = loaded(json!([{}]));
    press(&mut state, &[InputKey::Char('a')]);
    assert!(state.dirty);

    press(&mut state, &[InputKey::Char('q')]);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(!state.should_quit());

    press(&mut state, &[InputKey::Char('n')]);
    assert_eq!(state.ui_mode, UiMode::Normal);

    press(&mut state, &[InputKey::Char('q'), InputKey::Char('y')]);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────────────────────────
// Tabs and alerts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tab_keys() {
    let mut state = AppState::new();
    press(&mut state, &[InputKey::Char('3')]);
    assert_eq!(state.tab, Tab::Log);
    press(&mut state, &[InputKey::Tab]);
    assert_eq!(state.tab, Tab::Profiles);
    press(&mut state, &[InputKey::BackTab]);
    assert_eq!(state.tab, Tab::Log);
    press(&mut state, &[InputKey::Char('2')]);
    assert_eq!(state.tab, Tab::Files);
}

#[test]
fn test_request_failure_only_clears_its_panel() {
    let mut state = AppState::new();
    send(&mut state, Message::RefreshFiles);
    send(&mut state, Message::RefreshLog);
    send(&mut state, Message::ReloadData);
    assert!(state.files.loading && state.log.loading && state.loading_data);

    send(
        &mut state,
        Message::RequestFailed {
            panel: Tab::Log,
            error: "Not Found".into(),
        },
    );
    assert!(!state.log.loading);
    assert!(state.files.loading);
    assert!(state.loading_data);
    assert_eq!(state.ui_mode, UiMode::Alert);

    send(
        &mut state,
        Message::RequestFailed {
            panel: Tab::Profiles,
            error: "Bad Request".into(),
        },
    );
    assert!(state.files.loading);
    assert!(state.loading_data);
}

#[test]
fn test_alert_blocks_other_keys() {
    let mut state = AppState::new();
    send(
        &mut state,
        Message::RequestFailed {
            panel: Tab::Files,
            error: "500 Internal Server Error".into(),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Alert);

    assert!(handle_key(&state, InputKey::Char('2')).is_none());
    assert!(handle_key(&state, InputKey::Char('q')).is_none());

    press(&mut state, &[InputKey::Enter]);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.alert.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Load / save
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_reload_requests_data() {
    let mut state = AppState::new();
    let actions = press(&mut state, &[InputKey::CharCtrl('r')]);
    assert!(matches!(actions.as_slice(), [UpdateAction::LoadData]));
    assert!(state.loading_data);
}

#[test]
fn test_data_loaded_inserts_defaults_and_lists_files() {
    let mut state = AppState::new();
    state.dirty = true;
    let actions = send(
        &mut state,
        Message::DataLoaded {
            records: records(json!([{"stack": {"1": "A"}}])),
        },
    );

    assert_eq!(state.form.groups().len(), 2);
    assert!(!state.form.groups()[0].is_stack());
    assert!(state.form.groups()[1].is_stack());
    assert!(!state.dirty);
    assert!(!state.loading_data);
    assert!(matches!(actions.as_slice(), [UpdateAction::ListFiles]));
}

#[test]
fn test_data_load_failure_renders_empty_defaults() {
    let mut state = AppState::new();
    let actions = send(
        &mut state,
        Message::DataLoadFailed {
            error: "error sending request".into(),
        },
    );

    assert_eq!(state.form.groups().len(), 1);
    assert!(!state.form.groups()[0].is_stack());
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert!(matches!(actions.as_slice(), [UpdateAction::ListFiles]));
}

#[test]
fn test_save_sends_reconstructed_list() {
    let mut state = loaded(json!([{"base_url": "http://x"}, {"stack": {"1": "A"}}]));
    let actions = press(&mut state, &[InputKey::CharCtrl('s')]);

    match actions.as_slice() {
        [UpdateAction::SubmitData { data, export_after }] => {
            assert!(!export_after);
            assert_eq!(
                serde_json::to_value(data).unwrap(),
                json!([{"base_url": "http://x"}, {"stack": {"1": "A"}}])
            );
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn test_save_with_empty_stack_alerts_and_sends_nothing() {
    let mut state = loaded(json!([{}]));
    press(&mut state, &[InputKey::Char('a')]);
    let actions = press(&mut state, &[InputKey::CharCtrl('s')]);

    assert!(actions.is_empty());
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert_eq!(
        state.alert.as_ref().map(|a| a.message.as_str()),
        Some("Stack cannot be empty")
    );
    assert!(state.dirty);
}

#[test]
fn test_save_then_export() {
    let mut state = loaded(json!([{}]));
    state.settings.files.download_dir = PathBuf::from("/tmp/out");
    state.dirty = true;

    let actions = send(&mut state, Message::DataSaved { export_after: true });
    assert!(!state.dirty);
    match actions.as_slice() {
        [UpdateAction::ExportCsv { dest }] => {
            assert_eq!(dest, &PathBuf::from("/tmp/out/export.csv"));
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_edit_text_field_and_commit() {
    let mut state = loaded(json!([{}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::BaseUrl,
        },
    );

    press(&mut state, &[InputKey::Enter]);
    assert_eq!(state.ui_mode, UiMode::Editing);
    type_text(&mut state, "http://srv");
    press(&mut state, &[InputKey::Backspace, InputKey::Enter]);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(text_of(&state, 0, Field::BaseUrl).as_deref(), Some("http://sr"));
    assert!(state.dirty);
}

#[test]
fn test_typing_q_while_editing_does_not_quit() {
    let mut state = loaded(json!([{}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Cli,
        },
    );
    press(&mut state, &[InputKey::Enter]);
    type_text(&mut state, "q1");
    assert!(!state.should_quit());
    assert_eq!(state.editor.edit.as_ref().map(|e| e.text.as_str()), Some("q1"));
}

#[test]
fn test_esc_cancels_single_line_edit() {
    let mut state = loaded(json!([{"version": "1.0.0"}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Version,
        },
    );
    press(&mut state, &[InputKey::Enter]);
    type_text(&mut state, "9");
    press(&mut state, &[InputKey::Esc]);

    assert_eq!(text_of(&state, 0, Field::Version).as_deref(), Some("1.0.0"));
    assert!(!state.dirty);
}

#[test]
fn test_unchanged_commit_is_not_an_edit() {
    let mut state = loaded(json!([{"version": "1.0.0"}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Version,
        },
    );
    press(&mut state, &[InputKey::Enter, InputKey::Enter]);
    assert!(!state.dirty);
}

#[test]
fn test_text_area_enter_inserts_newline_and_esc_commits() {
    let mut state = loaded(json!([{"template": "a"}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Template,
        },
    );
    press(&mut state, &[InputKey::Enter, InputKey::Enter]);
    assert_eq!(state.ui_mode, UiMode::Editing);
    type_text(&mut state, "b");
    press(&mut state, &[InputKey::Esc]);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(text_of(&state, 0, Field::Template).as_deref(), Some("a\nb"));
}

#[test]
fn test_install_edit_fills_version() {
    let mut state = loaded(json!([{"version": "1.0.0"}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Install,
        },
    );
    press(&mut state, &[InputKey::Enter]);
    type_text(&mut state, "cat9k_iosxe.17.03.04a.SPA.bin");
    press(&mut state, &[InputKey::Enter]);

    assert_eq!(text_of(&state, 0, Field::Version).as_deref(), Some("17.3.4a"));
}

#[test]
fn test_picker_selects_suggestion() {
    let mut state = loaded(json!([{}]));
    send(
        &mut state,
        Message::FilesLoaded {
            files: vec![file("a.bin"), file("img-2.0.1.bin")],
        },
    );
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Install,
        },
    );

    press(&mut state, &[InputKey::Char('p')]);
    assert_eq!(state.ui_mode, UiMode::Picker);
    press(
        &mut state,
        &[
            InputKey::Down,
            InputKey::Down,
            InputKey::Down,
            InputKey::Enter,
        ],
    );

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(text_of(&state, 0, Field::Install).as_deref(), Some("img-2.0.1.bin"));
    assert_eq!(text_of(&state, 0, Field::Version).as_deref(), Some("2.0.1"));
    assert!(state.dirty);
}

#[test]
fn test_picker_does_not_open_on_text_field() {
    let mut state = loaded(json!([{}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Version,
        },
    );
    press(&mut state, &[InputKey::Char('p')]);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_space_toggles_save() {
    let mut state = loaded(json!([{}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Save,
        },
    );
    press(&mut state, &[InputKey::Char(' ')]);
    assert_eq!(
        state.form.group(0).and_then(|g| g.widget(Field::Save)),
        Some(&Widget::Toggle(true))
    );
    press(&mut state, &[InputKey::Enter]);
    assert_eq!(
        state.form.group(0).and_then(|g| g.widget(Field::Save)),
        Some(&Widget::Toggle(false))
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Stacks and key/value rows
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_add_stack_focuses_its_first_key() {
    let mut state = loaded(json!([{}, {"stack": {"1": "A"}}]));
    press(&mut state, &[InputKey::Char('a')]);

    assert_eq!(state.form.groups().len(), 3);
    assert_eq!(
        state.editor.focused(&state.form),
        Some(FocusTarget::Entry {
            index: 2,
            field: Field::Stack,
            row: 0,
            column: KeyValueColumn::Key,
        })
    );
}

#[test]
fn test_remove_stack_key_only_removes_stacks() {
    let mut state = loaded(json!([{}, {"stack": {"1": "A"}}]));
    focus(
        &mut state,
        FocusTarget::Field {
            index: 0,
            field: Field::Version,
        },
    );
    press(&mut state, &[InputKey::Char('x')]);
    assert_eq!(state.form.groups().len(), 2);
    assert!(!state.dirty);

    focus(
        &mut state,
        FocusTarget::Field {
            index: 1,
            field: Field::Version,
        },
    );
    press(&mut state, &[InputKey::Char('x')]);
    assert_eq!(state.form.groups().len(), 1);
    assert!(state.dirty);
    assert!(state.editor.focused(&state.form).is_some());
}

#[test]
fn test_remove_stack_button() {
    let mut state = loaded(json!([{}, {"stack": {"1": "A"}}]));
    focus(&mut state, FocusTarget::RemoveStack { index: 1 });
    press(&mut state, &[InputKey::Enter]);
    assert_eq!(state.form.groups().len(), 1);
}

#[test]
fn test_insert_and_fill_entry() {
    let mut state = loaded(json!([{}, {"stack": {"1": "A"}}]));
    focus(
        &mut state,
        FocusTarget::Entry {
            index: 1,
            field: Field::Stack,
            row: 0,
            column: KeyValueColumn::Value,
        },
    );
    press(&mut state, &[InputKey::Char('+')]);
    assert_eq!(
        state.editor.focused(&state.form),
        Some(FocusTarget::Entry {
            index: 1,
            field: Field::Stack,
            row: 1,
            column: KeyValueColumn::Key,
        })
    );

    press(&mut state, &[InputKey::Enter]);
    type_text(&mut state, "2");
    press(&mut state, &[InputKey::Enter, InputKey::Down, InputKey::Enter]);
    type_text(&mut state, "B");
    press(&mut state, &[InputKey::Enter]);

    let data = state.form.reconstruct().unwrap();
    assert_eq!(
        serde_json::to_value(&data[1]).unwrap(),
        json!({"stack": {"1": "A", "2": "B"}})
    );
}

#[test]
fn test_remove_entry_keeps_last_row() {
    let mut state = loaded(json!([{}, {"stack": {"1": "A", "2": "B"}}]));
    let target = FocusTarget::Entry {
        index: 1,
        field: Field::Stack,
        row: 1,
        column: KeyValueColumn::Key,
    };
    focus(&mut state, target);

    press(&mut state, &[InputKey::Char('-')]);
    assert!(state.dirty);
    assert_eq!(
        state.editor.focused(&state.form),
        Some(FocusTarget::Entry {
            index: 1,
            field: Field::Stack,
            row: 0,
            column: KeyValueColumn::Key,
        })
    );

    state.dirty = false;
    press(&mut state, &[InputKey::Char('-')]);
    assert!(!state.dirty);
    assert_eq!(
        serde_json::to_value(&state.form.reconstruct().unwrap()[1]).unwrap(),
        json!({"stack": {"1": "A"}})
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_files_loaded_updates_suggestions() {
    let mut state = loaded(json!([{}, {"stack": {"1": "A"}}]));
    send(
        &mut state,
        Message::FilesLoaded {
            files: vec![file("x.bin")],
        },
    );
    assert_eq!(state.form.suggestions(), &["x.bin".to_string()]);
    assert!(!state.files.loading);
}

#[test]
fn test_file_deleted_drops_suggestion() {
    let mut state = loaded(json!([{}]));
    send(
        &mut state,
        Message::FilesLoaded {
            files: vec![file("x.bin"), file("y.bin")],
        },
    );
    state.tab = Tab::Files;

    let actions = press(&mut state, &[InputKey::Char('d')]);
    match actions.as_slice() {
        [UpdateAction::DeleteFile { name }] => assert_eq!(name, "x.bin"),
        other => panic!("unexpected actions: {other:?}"),
    }

    send(
        &mut state,
        Message::FileDeleted {
            name: "x.bin".into(),
        },
    );
    assert_eq!(state.form.suggestions(), &["y.bin".to_string()]);
}

#[test]
fn test_download_uses_configured_dir() {
    let mut state = AppState::new();
    state.settings.files.download_dir = PathBuf::from("/srv/dl");
    state.tab = Tab::Files;
    send(
        &mut state,
        Message::FilesLoaded {
            files: vec![file("a.bin")],
        },
    );

    let actions = press(&mut state, &[InputKey::Char('o')]);
    match actions.as_slice() {
        [UpdateAction::DownloadFile { name, dest_dir }] => {
            assert_eq!(name, "a.bin");
            assert_eq!(dest_dir, &PathBuf::from("/srv/dl"));
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn test_upload_prompt_starts_one_upload_per_path() {
    let mut state = AppState::new();
    state.tab = Tab::Files;
    state.settings.files.upload_folder = "images".into();

    press(&mut state, &[InputKey::Char('u')]);
    assert_eq!(state.ui_mode, UiMode::Prompt);
    type_text(&mut state, "/tmp/a.bin  /tmp/b.bin");
    let actions = press(&mut state, &[InputKey::Enter]);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.files.uploads.len(), 2);
    assert_eq!(state.files.uploads[0].name, "a.bin");
    assert_eq!(state.upload_cancels.len(), 2);
    match actions.as_slice() {
        [UpdateAction::UploadFiles { folder, uploads }] => {
            assert_eq!(folder, "images");
            let paths: Vec<_> = uploads.iter().map(|u| u.path.clone()).collect();
            assert_eq!(
                paths,
                vec![PathBuf::from("/tmp/a.bin"), PathBuf::from("/tmp/b.bin")]
            );
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn test_upload_prompt_keeps_quoted_paths_whole() {
    let mut state = AppState::new();
    state.tab = Tab::Files;
    send(&mut state, Message::StartPrompt(PromptKind::UploadPaths));
    type_text(&mut state, r#""/tmp/my images/a.bin" '/tmp/b c.cfg' /tmp/d.bin "#);
    let actions = send(&mut state, Message::PromptSubmit);

    let [UpdateAction::UploadFiles { uploads, .. }] = actions.as_slice() else {
        panic!("unexpected actions: {actions:?}");
    };
    let paths: Vec<_> = uploads.iter().map(|u| u.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/tmp/my images/a.bin"),
            PathBuf::from("/tmp/b c.cfg"),
            PathBuf::from("/tmp/d.bin"),
        ]
    );
    assert_eq!(state.files.uploads[0].name, "a.bin");
}

#[test]
fn test_empty_upload_prompt_does_nothing() {
    let mut state = AppState::new();
    send(&mut state, Message::StartPrompt(PromptKind::UploadPaths));
    type_text(&mut state, "   ");
    let actions = send(&mut state, Message::PromptSubmit);
    assert!(actions.is_empty());
    assert!(!state.files.has_uploads());
}

#[test]
fn test_cancel_upload_fires_handle() {
    let mut state = AppState::new();
    state.tab = Tab::Files;
    send(&mut state, Message::StartPrompt(PromptKind::UploadPaths));
    type_text(&mut state, "/tmp/a.bin");
    let mut actions = send(&mut state, Message::PromptSubmit);

    let Some(UpdateAction::UploadFiles { mut uploads, .. }) = actions.pop() else {
        panic!("expected an upload action");
    };
    let mut request = uploads.remove(0);

    press(&mut state, &[InputKey::Char('c')]);
    assert!(request.cancel.try_recv().is_ok());
    assert!(state.upload_cancels.is_empty());
    // Row stays until the task reports back
    assert!(state.files.has_uploads());

    let actions = send(&mut state, Message::UploadCancelled { id: request.id });
    assert!(!state.files.has_uploads());
    assert_ne!(state.ui_mode, UiMode::Alert);
    assert!(matches!(actions.as_slice(), [UpdateAction::ListFiles]));
}

#[test]
fn test_files_reload_after_last_upload() {
    let mut state = AppState::new();
    let first = state.files.start_upload("a");
    let second = state.files.start_upload("b");

    send(
        &mut state,
        Message::UploadProgress {
            id: second,
            percent: 40,
        },
    );
    assert_eq!(state.files.uploads[1].percent, 40);

    let actions = send(&mut state, Message::UploadFinished { id: first });
    assert!(actions.is_empty());

    let actions = send(
        &mut state,
        Message::UploadFailed {
            id: second,
            error: "413 Payload Too Large".into(),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert!(matches!(actions.as_slice(), [UpdateAction::ListFiles]));
}

#[test]
fn test_upload_folder_prompt_saves_settings() {
    let mut state = AppState::new();
    state.config_path = Some(PathBuf::from("/tmp/ztpc.toml"));
    state.settings.files.upload_folder = "old".into();

    send(&mut state, Message::StartPrompt(PromptKind::UploadFolder));
    assert_eq!(state.prompt.as_ref().map(|p| p.buffer.as_str()), Some("old"));
    for _ in 0..3 {
        send(&mut state, Message::PromptBackspace);
    }
    type_text(&mut state, "new");
    let actions = send(&mut state, Message::PromptSubmit);

    assert_eq!(state.settings.files.upload_folder, "new");
    match actions.as_slice() {
        [UpdateAction::SaveSettings { path, settings }] => {
            assert_eq!(path, &PathBuf::from("/tmp/ztpc.toml"));
            assert_eq!(settings.files.upload_folder, "new");
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn test_csv_import_then_reload() {
    let mut state = AppState::new();
    send(&mut state, Message::StartPrompt(PromptKind::ImportCsv));
    type_text(&mut state, "/tmp/in.csv");
    let actions = send(&mut state, Message::PromptSubmit);
    match actions.as_slice() {
        [UpdateAction::ImportCsv { path }] => assert_eq!(path, &PathBuf::from("/tmp/in.csv")),
        other => panic!("unexpected actions: {other:?}"),
    }

    let actions = send(&mut state, Message::CsvImported);
    assert!(matches!(actions.as_slice(), [UpdateAction::LoadData]));
}

#[test]
fn test_prompt_cancel() {
    let mut state = AppState::new();
    send(&mut state, Message::StartPrompt(PromptKind::ImportCsv));
    press(&mut state, &[InputKey::Esc]);
    assert!(state.prompt.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

// ─────────────────────────────────────────────────────────────────────────────
// Log
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_log_keys() {
    let mut state = AppState::new();
    state.tab = Tab::Log;

    let actions = press(&mut state, &[InputKey::Char('r')]);
    assert!(matches!(actions.as_slice(), [UpdateAction::GetLog]));
    assert!(state.log.loading);

    send(
        &mut state,
        Message::LogLoaded {
            entries: vec![LogEntry::default(), LogEntry::default()],
        },
    );
    press(&mut state, &[InputKey::Char('j'), InputKey::Enter]);
    assert_eq!(state.log.selected, 1);
    assert!(state.log.show_detail);

    let actions = press(&mut state, &[InputKey::Char('c')]);
    assert!(matches!(actions.as_slice(), [UpdateAction::ClearLog]));
    send(&mut state, Message::LogCleared);
    assert!(state.log.entries.is_empty());
}
