//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::input_key::InputKey;
use crate::state::{PromptKind, Tab};
use ztp_core::{FileEntry, LogEntry, ProfileList};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog with unsaved edits)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    SwitchTab(Tab),
    NextTab,
    PrevTab,

    /// Close the blocking alert
    DismissAlert,

    /// A request started from `panel` failed; shown as a blocking alert
    RequestFailed { panel: Tab, error: String },

    // ─────────────────────────────────────────────────────────
    // Profile Editor
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusFirst,
    FocusLast,

    /// Enter on the focused target: edit, toggle or press
    Activate,
    /// Flip the focused toggle
    ToggleFocused,
    OpenPicker,

    /// Insert a blank key/value row below the focused one
    InsertEntryBelow,
    /// Remove the focused key/value row
    RemoveEntry,

    AddStack,
    /// Remove the stack group owning the focus
    RemoveStack,

    EditInput(char),
    EditBackspace,
    EditNewline,
    EditCommit,
    EditCancel,

    PickerUp,
    PickerDown,
    PickerSelect,
    PickerCancel,

    // ─────────────────────────────────────────────────────────
    // Profile Data
    // ─────────────────────────────────────────────────────────
    ReloadData,
    DataLoaded { records: ProfileList },
    DataLoadFailed { error: String },

    /// Reconstruct and save; optionally export CSV afterwards
    SubmitData { export_after: bool },
    DataSaved { export_after: bool },

    // ─────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────
    RefreshFiles,
    FilesLoaded { files: Vec<FileEntry> },
    FileSelectNext,
    FileSelectPrev,

    DeleteFile,
    FileDeleted { name: String },
    DownloadFile,
    FileDownloaded { path: PathBuf },

    UploadProgress { id: u64, percent: u16 },
    UploadFinished { id: u64 },
    UploadFailed { id: u64, error: String },
    UploadCancelled { id: u64 },
    CancelUpload,

    CsvImported,
    ExportCsv,
    CsvExported { path: PathBuf },

    // ─────────────────────────────────────────────────────────
    // Text Prompt (upload paths, upload folder, CSV path)
    // ─────────────────────────────────────────────────────────
    StartPrompt(PromptKind),
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,

    // ─────────────────────────────────────────────────────────
    // Provisioning Log
    // ─────────────────────────────────────────────────────────
    RefreshLog,
    LogLoaded { entries: Vec<LogEntry> },
    LogSelectNext,
    LogSelectPrev,
    ToggleLogDetail,
    ClearLog,
    LogCleared,
}
