//! Application state (Model in TEA pattern)

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::oneshot;

use crate::config::Settings;
use crate::confirm_dialog::{AlertState, ConfirmDialogState};
use crate::editor_state::EditorState;
use crate::files_state::FilesState;
use crate::log_state::LogState;
use ztp_core::{ProfileForm, RenderSession};

/// How long a status line stays visible, in ticks
pub const STATUS_TICKS: u16 = 60;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Browsing the active tab
    #[default]
    Normal,
    /// Typing into a profile field or key/value cell
    Editing,
    /// Choosing a suggestion for a combo field
    Picker,
    /// Typing into a prompt on the files panel
    Prompt,
    /// Blocking alert on top of everything
    Alert,
    /// Confirmation dialog
    ConfirmDialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profiles,
    Files,
    Log,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Profiles, Tab::Files, Tab::Log];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Profiles => "Profiles",
            Tab::Files => "Files",
            Tab::Log => "Log",
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Tab::Profiles => 0,
            Tab::Files => 1,
            Tab::Log => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.position() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.position() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// What a text prompt is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Space separated local paths to upload
    UploadPaths,
    /// Server-side folder for uploads
    UploadFolder,
    /// Local CSV file to import
    ImportCsv,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::UploadPaths => "Upload files",
            PromptKind::UploadFolder => "Upload folder",
            PromptKind::ImportCsv => "Import CSV",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub buffer: String,
}

/// Transient one-line feedback in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub ticks_left: u16,
}

/// Complete application state
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub tab: Tab,

    pub settings: Settings,
    /// Where settings are saved back to, if anywhere
    pub config_path: Option<PathBuf>,

    // Profiles
    pub form: ProfileForm,
    pub session: RenderSession,
    pub editor: EditorState,
    /// Unsaved profile edits exist
    pub dirty: bool,
    pub loading_data: bool,

    pub files: FilesState,
    /// Cancel handles of running uploads, keyed by upload id
    pub upload_cancels: HashMap<u64, oneshot::Sender<()>>,

    pub log: LogState,

    pub prompt: Option<PromptState>,
    pub alert: Option<AlertState>,
    /// Mode to return to once the alert is dismissed
    pub mode_before_alert: UiMode,
    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub status: Option<StatusLine>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings, config_path: Option<PathBuf>) -> Self {
        Self {
            settings,
            config_path,
            ..Self::default()
        }
    }

    /// Request application quit
    pub fn request_quit(&mut self) {
        if self.dirty && self.settings.ui.confirm_quit {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation());
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Show a blocking alert
    pub fn show_alert(&mut self, alert: AlertState) {
        if self.ui_mode != UiMode::Alert {
            self.mode_before_alert = self.ui_mode;
        }
        self.alert = Some(alert);
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = self.mode_before_alert;
        self.mode_before_alert = UiMode::Normal;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            ticks_left: STATUS_TICKS,
        });
    }

    /// Age the status line by one tick
    pub fn tick_status(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }
}
