//! Modal dialogs: confirmations and blocking alerts

use crate::message::Message;

/// Yes/no style dialog; each option dispatches its message
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Quit with unsaved profile edits
    pub fn quit_confirmation() -> Self {
        Self::new(
            "Quit ZTP console?",
            "Profile edits have not been saved.",
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        )
    }
}

/// A blocking notification. Dismissing it is the only way forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}
