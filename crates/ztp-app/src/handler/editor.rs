//! Profile editor handlers
//!
//! Focus, inline edits, the suggestion picker, stack groups and the
//! load/save round trip of the profile list.

use tracing::{debug, info, warn};

use crate::confirm_dialog::AlertState;
use crate::editor_state::FocusTarget;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use ztp_core::{
    ensure_defaults, Field, KeyValueColumn, ProfileList, ProfileRecord, Widget, WidgetKind,
};

use super::{UpdateAction, UpdateResult};

/// Show `error` as a blocking alert
pub(super) fn show_error(state: &mut AppState, error: impl Into<String>) {
    state.show_alert(AlertState::error(error));
}

/// Leave edit/picker mode after the form was replaced underneath
fn leave_editor_modes(state: &mut AppState) {
    state.editor.reset();
    if matches!(state.ui_mode, UiMode::Editing | UiMode::Picker) {
        state.ui_mode = UiMode::Normal;
    }
    if matches!(state.mode_before_alert, UiMode::Editing | UiMode::Picker) {
        state.mode_before_alert = UiMode::Normal;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Focus actions
// ─────────────────────────────────────────────────────────────────────────────

/// Enter on the focused target
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(target) = state.editor.focused(&state.form) else {
        return UpdateResult::none();
    };

    match target {
        FocusTarget::Field { field, .. } if field.kind() == WidgetKind::Toggle => {
            handle_toggle_focused(state)
        }
        FocusTarget::Field { .. } | FocusTarget::Entry { .. } => {
            if state.editor.begin_edit(&state.form) {
                state.ui_mode = UiMode::Editing;
            }
            UpdateResult::none()
        }
        FocusTarget::RemoveStack { .. } => handle_remove_stack(state),
        FocusTarget::AddStack => handle_add_stack(state),
    }
}

pub fn handle_toggle_focused(state: &mut AppState) -> UpdateResult {
    if let Some(FocusTarget::Field { index, field }) = state.editor.focused(&state.form) {
        if state.form.toggle(index, field) {
            state.dirty = true;
        }
    }
    UpdateResult::none()
}

pub fn handle_open_picker(state: &mut AppState) -> UpdateResult {
    if state.editor.open_picker(&state.form) {
        state.ui_mode = UiMode::Picker;
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Key/value rows
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_insert_entry_below(state: &mut AppState) -> UpdateResult {
    let Some(FocusTarget::Entry {
        index, field, row, ..
    }) = state.editor.focused(&state.form)
    else {
        return UpdateResult::none();
    };

    if let Some(new_row) = state.form.insert_row_below(index, field, row) {
        state.dirty = true;
        state.editor.focus_on(
            &state.form,
            FocusTarget::Entry {
                index,
                field,
                row: new_row,
                column: KeyValueColumn::Key,
            },
        );
    }
    UpdateResult::none()
}

pub fn handle_remove_entry(state: &mut AppState) -> UpdateResult {
    let Some(FocusTarget::Entry {
        index,
        field,
        row,
        column,
    }) = state.editor.focused(&state.form)
    else {
        return UpdateResult::none();
    };

    if !state.form.remove_row(index, field, row) {
        debug!("Refusing to remove the only row of {}", field);
        return UpdateResult::none();
    }
    state.dirty = true;

    let remaining = match state.form.group(index).and_then(|g| g.widget(field)) {
        Some(Widget::KeyValue(table)) => table.len(),
        _ => 0,
    };
    let row = row.min(remaining.saturating_sub(1));
    if !state.editor.focus_on(
        &state.form,
        FocusTarget::Entry {
            index,
            field,
            row,
            column,
        },
    ) {
        state.editor.clamp(&state.form);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Stack groups
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_add_stack(state: &mut AppState) -> UpdateResult {
    let index = state.form.add_stack(&mut state.session);
    state.dirty = true;
    state.editor.focus_on(
        &state.form,
        FocusTarget::Entry {
            index,
            field: Field::Stack,
            row: 0,
            column: KeyValueColumn::Key,
        },
    );
    UpdateResult::none()
}

/// Remove the stack group that owns the focus
pub fn handle_remove_stack(state: &mut AppState) -> UpdateResult {
    let Some(index) = state
        .editor
        .focused(&state.form)
        .and_then(|t| t.group_index())
    else {
        return UpdateResult::none();
    };

    if state.form.remove_stack(index) {
        state.dirty = true;
        state.editor.clamp(&state.form);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Inline editing
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_edit_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(edit) = &mut state.editor.edit {
        edit.text.push(c);
    }
    UpdateResult::none()
}

pub fn handle_edit_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(edit) = &mut state.editor.edit {
        edit.text.pop();
    }
    UpdateResult::none()
}

pub fn handle_edit_newline(state: &mut AppState) -> UpdateResult {
    if let Some(edit) = &mut state.editor.edit {
        if edit.multiline {
            edit.text.push('\n');
        }
    }
    UpdateResult::none()
}

/// Write the edit buffer back into the form
pub fn handle_edit_commit(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let Some(edit) = state.editor.edit.take() else {
        return UpdateResult::none();
    };

    let changed = match edit.target {
        FocusTarget::Field { index, field } => {
            let current = state
                .form
                .group(index)
                .and_then(|g| g.widget(field))
                .and_then(Widget::text);
            current != Some(edit.text.as_str()) && state.form.commit_text(index, field, edit.text)
        }
        FocusTarget::Entry {
            index,
            field,
            row,
            column,
        } => {
            let current = match state.form.group(index).and_then(|g| g.widget(field)) {
                Some(Widget::KeyValue(table)) => table.rows().get(row).map(|r| r.cell(column)),
                _ => None,
            };
            current != Some(edit.text.as_str())
                && state.form.set_cell(index, field, row, column, edit.text)
        }
        FocusTarget::RemoveStack { .. } | FocusTarget::AddStack => false,
    };

    if changed {
        state.dirty = true;
    }
    UpdateResult::none()
}

pub fn handle_edit_cancel(state: &mut AppState) -> UpdateResult {
    state.editor.edit = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Suggestion picker
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_picker_move(state: &mut AppState, down: bool) -> UpdateResult {
    let len = state.editor.picker_len(&state.form);
    if let Some(picker) = &mut state.editor.picker {
        if down {
            if picker.selected + 1 < len {
                picker.selected += 1;
            }
        } else {
            picker.selected = picker.selected.saturating_sub(1);
        }
    }
    UpdateResult::none()
}

pub fn handle_picker_select(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    if let Some(picker) = state.editor.picker.take() {
        if state
            .form
            .select_suggestion(picker.index, picker.field, picker.selected)
        {
            state.dirty = true;
        }
    }
    UpdateResult::none()
}

pub fn handle_picker_cancel(state: &mut AppState) -> UpdateResult {
    state.editor.picker = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Load / save
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_reload_data(state: &mut AppState) -> UpdateResult {
    state.loading_data = true;
    UpdateResult::action(UpdateAction::LoadData)
}

/// Render the fetched list and refresh the file suggestions
pub fn handle_data_loaded(state: &mut AppState, mut records: ProfileList) -> UpdateResult {
    if ensure_defaults(&mut records) {
        debug!("Profile list had no defaults record, inserted one");
    }
    state.form.load(&records, &mut state.session);
    leave_editor_modes(state);
    state.dirty = false;
    state.loading_data = false;
    info!("Loaded {} profile records", records.len());
    state.set_status(format!("Loaded {} profiles", records.len()));
    UpdateResult::message(Message::RefreshFiles)
}

/// Fall back to a single empty defaults group
pub fn handle_data_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Loading profiles failed: {}", error);
    state.form.load(&[ProfileRecord::default()], &mut state.session);
    leave_editor_modes(state);
    state.dirty = false;
    state.loading_data = false;
    show_error(state, error);
    UpdateResult::message(Message::RefreshFiles)
}

pub fn handle_submit_data(state: &mut AppState, export_after: bool) -> UpdateResult {
    match state.form.reconstruct() {
        Ok(data) => UpdateResult::action(UpdateAction::SubmitData { data, export_after }),
        Err(e) => {
            warn!("Not saving profiles: {}", e);
            show_error(state, e.to_string());
            UpdateResult::none()
        }
    }
}

pub fn handle_data_saved(state: &mut AppState, export_after: bool) -> UpdateResult {
    state.dirty = false;
    state.set_status("Profiles saved");
    if export_after {
        UpdateResult::message(Message::ExportCsv)
    } else {
        UpdateResult::none()
    }
}
