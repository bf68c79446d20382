//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, PromptKind, Tab, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Alert => handle_key_alert(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Editing => handle_key_editing(state, key),
        UiMode::Picker => handle_key_picker(key),
        UiMode::Prompt => handle_key_prompt(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Blocking alert: only dismissal gets through
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Typing into a field or key/value cell
fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    let multiline = state.editor.edit.as_ref().is_some_and(|e| e.multiline);

    match key {
        InputKey::Enter if multiline => Some(Message::EditNewline),
        InputKey::Enter => Some(Message::EditCommit),
        // Text areas have no other way out, so Esc keeps the text
        InputKey::Esc if multiline => Some(Message::EditCommit),
        InputKey::Esc => Some(Message::EditCancel),
        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => key.typed_char().map(Message::EditInput),
    }
}

fn handle_key_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::PickerUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::PickerDown),
        InputKey::Enter => Some(Message::PickerSelect),
        InputKey::Esc => Some(Message::PickerCancel),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::PromptSubmit),
        InputKey::Esc => Some(Message::PromptCancel),
        InputKey::Backspace => Some(Message::PromptBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => key.typed_char().map(Message::PromptInput),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Request quit (may show confirmation dialog with unsaved edits)
        InputKey::Char('q') => Some(Message::RequestQuit),

        // Force quit (bypass confirmation) - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Tab Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char('1') => Some(Message::SwitchTab(Tab::Profiles)),
        InputKey::Char('2') => Some(Message::SwitchTab(Tab::Files)),
        InputKey::Char('3') => Some(Message::SwitchTab(Tab::Log)),
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PrevTab),

        _ => match state.tab {
            Tab::Profiles => handle_key_profiles(key),
            Tab::Files => handle_key_files(key),
            Tab::Log => handle_key_log(key),
        },
    }
}

fn handle_key_profiles(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::FocusNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Home | InputKey::Char('g') => Some(Message::FocusFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::FocusLast),

        InputKey::Enter => Some(Message::Activate),
        InputKey::Char(' ') => Some(Message::ToggleFocused),
        InputKey::Char('p') => Some(Message::OpenPicker),

        InputKey::Char('+') => Some(Message::InsertEntryBelow),
        InputKey::Char('-') => Some(Message::RemoveEntry),
        InputKey::Char('a') => Some(Message::AddStack),
        InputKey::Char('x') => Some(Message::RemoveStack),

        InputKey::CharCtrl('s') => Some(Message::SubmitData {
            export_after: false,
        }),
        InputKey::CharCtrl('e') => Some(Message::SubmitData { export_after: true }),
        InputKey::CharCtrl('r') => Some(Message::ReloadData),
        _ => None,
    }
}

fn handle_key_files(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::FileSelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::FileSelectPrev),

        InputKey::Char('u') => Some(Message::StartPrompt(PromptKind::UploadPaths)),
        InputKey::Char('f') => Some(Message::StartPrompt(PromptKind::UploadFolder)),
        InputKey::Char('i') => Some(Message::StartPrompt(PromptKind::ImportCsv)),
        InputKey::Char('d') => Some(Message::DeleteFile),
        InputKey::Char('o') => Some(Message::DownloadFile),
        InputKey::Char('c') => Some(Message::CancelUpload),
        InputKey::Char('e') => Some(Message::ExportCsv),
        InputKey::Char('r') => Some(Message::RefreshFiles),
        _ => None,
    }
}

fn handle_key_log(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::LogSelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::LogSelectPrev),
        InputKey::Enter => Some(Message::ToggleLogDetail),
        InputKey::Char('r') => Some(Message::RefreshLog),
        InputKey::Char('c') => Some(Message::ClearLog),
        _ => None,
    }
}
