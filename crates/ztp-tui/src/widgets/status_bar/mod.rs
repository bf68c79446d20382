//! Status bar widget
//!
//! Shows the transient status message, or the count of in-flight requests,
//! above a row of key hints for the current tab and mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ztp_app::state::{AppState, Tab, UiMode};

use crate::theme::styles;

type Hint = (&'static str, &'static str);

const PROFILE_HINTS: &[Hint] = &[
    ("↑↓", "move"),
    ("Enter", "edit"),
    ("Space", "toggle"),
    ("p", "pick"),
    ("+/-", "row"),
    ("a/x", "stack"),
    ("^S", "save"),
    ("^E", "save+export"),
    ("^R", "reload"),
    ("q", "quit"),
];

const FILES_HINTS: &[Hint] = &[
    ("u", "upload"),
    ("f", "folder"),
    ("d", "delete"),
    ("o", "download"),
    ("c", "cancel"),
    ("i", "import"),
    ("e", "export"),
    ("r", "refresh"),
    ("q", "quit"),
];

const LOG_HINTS: &[Hint] = &[
    ("↑↓", "move"),
    ("Enter", "detail"),
    ("r", "refresh"),
    ("c", "clear"),
    ("q", "quit"),
];

const EDIT_HINTS: &[Hint] = &[("Enter", "commit"), ("Esc", "cancel")];
const TEXT_AREA_HINTS: &[Hint] = &[("Enter", "newline"), ("Esc", "commit")];
const PICKER_HINTS: &[Hint] = &[("↑↓", "move"), ("Enter", "select"), ("Esc", "cancel")];

/// Key hints for the current tab and mode
pub fn hints_for(state: &AppState) -> &'static [Hint] {
    match state.ui_mode {
        UiMode::Editing => match &state.editor.edit {
            Some(edit) if edit.multiline => TEXT_AREA_HINTS,
            _ => EDIT_HINTS,
        },
        UiMode::Picker => PICKER_HINTS,
        // Dialogs carry their own hints
        UiMode::Prompt | UiMode::Alert | UiMode::ConfirmDialog => &[],
        UiMode::Normal => match state.tab {
            Tab::Profiles => PROFILE_HINTS,
            Tab::Files => FILES_HINTS,
            Tab::Log => LOG_HINTS,
        },
    }
}

/// Status bar widget showing the status message and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(status) = &self.state.status {
            return Line::from(vec![
                Span::raw(" "),
                Span::styled(status.text.clone(), styles::status_green()),
            ]);
        }

        let uploads = self.state.files.uploads.len();
        let mut busy = Vec::new();
        if self.state.loading_data {
            busy.push("loading profiles".to_string());
        }
        if uploads > 0 {
            busy.push(format!("{uploads} upload(s) in progress"));
        }
        if busy.is_empty() {
            return Line::default();
        }
        Line::from(vec![
            Span::raw(" "),
            Span::styled(busy.join(" │ "), styles::text_secondary()),
        ])
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in hints_for(self.state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}"), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(vec![self.status_line(), self.hint_line()]).render(area, buf);
    }
}
