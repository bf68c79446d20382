//! Modal dialogs: alert, quit confirmation, text prompt and suggestion picker.
//!
//! Each dialog takes the whole screen area, dims it and draws itself centered.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use ztp_app::confirm_dialog::{AlertState, ConfirmDialogState};
use ztp_app::state::PromptState;

use super::modal_overlay::prepare_modal;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 60;

/// Lines the wrapped `text` needs in a dialog of `width` columns.
///
/// Word wrapping leaves ragged line ends, so this counts against a narrower
/// width than the dialog actually has.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(12).max(1) as usize;
    text.lines()
        .map(|line| line.width().div_ceil(inner).max(1))
        .sum::<usize>()
        .max(1) as u16
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", styles::text_muted()));
        }
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!(" {label}"), styles::text_muted()));
    }
    Line::from(spans).alignment(Alignment::Center)
}

// ─────────────────────────────────────────────────────────────────────────────
// Alert
// ─────────────────────────────────────────────────────────────────────────────

/// Blocking error alert
pub struct AlertDialog<'a> {
    alert: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a AlertState) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = wrapped_height(&self.alert.message, DIALOG_WIDTH);
        // borders + blank + hint
        let modal = prepare_modal(buf, area, DIALOG_WIDTH, body + 4);

        let title = format!(" {} ", self.alert.title);
        let block = styles::modal_block(&title).border_style(styles::status_red());
        let mut lines: Vec<Line> = self
            .alert
            .message
            .lines()
            .map(|l| Line::from(Span::styled(l, styles::text_primary())))
            .collect();
        lines.push(Line::default());
        lines.push(hint_line(&[("Enter", "dismiss")]));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(modal, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Confirm
// ─────────────────────────────────────────────────────────────────────────────

/// Yes/no confirmation, used before quitting with unsaved edits
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = wrapped_height(&self.state.message, DIALOG_WIDTH);
        let modal = prepare_modal(buf, area, DIALOG_WIDTH, body + 5);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title);

        let mut options = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                options.push(Span::raw("   "));
            }
            let key = if i == 0 { "y" } else { "n" };
            options.push(Span::styled(format!("[{key}]"), styles::keybinding()));
            options.push(Span::styled(format!(" {label}"), styles::text_bright()));
        }

        let lines = vec![
            Line::from(Span::styled(
                self.state.message.clone(),
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(options).alignment(Alignment::Center),
        ];
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(modal, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Prompt
// ─────────────────────────────────────────────────────────────────────────────

/// Single-line text prompt for paths and the upload folder
pub struct PromptDialog<'a> {
    prompt: &'a PromptState,
}

impl<'a> PromptDialog<'a> {
    pub fn new(prompt: &'a PromptState) -> Self {
        Self { prompt }
    }
}

impl Widget for PromptDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = DIALOG_WIDTH.max(area.width.saturating_mul(3) / 4);
        let modal = prepare_modal(buf, area, width, 5);

        let title = format!(" {} ", self.prompt.kind.label());
        let block = styles::modal_block(&title);

        // Show the tail of long input so the cursor stays visible
        let room = width.saturating_sub(4) as usize;
        let buffer = &self.prompt.buffer;
        let mut shown: &str = buffer;
        while shown.width() >= room && !shown.is_empty() {
            let mut chars = shown.chars();
            chars.next();
            shown = chars.as_str();
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(shown.to_string(), styles::editing()),
                Span::styled("▏", styles::editing()),
            ]),
            Line::default(),
            hint_line(&[("Enter", "confirm"), ("Esc", "cancel")]),
        ];
        Paragraph::new(lines).block(block).render(modal, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Picker
// ─────────────────────────────────────────────────────────────────────────────

/// Suggestion list popup for a combo box
pub struct PickerDialog<'a> {
    options: &'a [String],
    selected: usize,
}

impl<'a> PickerDialog<'a> {
    pub fn new(options: &'a [String], selected: usize) -> Self {
        Self { options, selected }
    }
}

impl Widget for PickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_rows = area.height.saturating_sub(4).max(1);
        let rows = (self.options.len() as u16).clamp(1, max_rows);
        let modal = prepare_modal(buf, area, DIALOG_WIDTH, rows + 2);
        let block = styles::modal_block(" Select file ");

        let offset = (self.selected + 1).saturating_sub(rows as usize);
        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, option)| {
                // The blank option clears the field
                let label = if option.is_empty() {
                    "(none)"
                } else {
                    option.as_str()
                };
                let style = if i == self.selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(format!(" {label} "), style))
            })
            .collect();

        Paragraph::new(lines).block(block).render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ztp_app::state::PromptKind;

    #[test]
    fn test_alert_shows_message() {
        let alert = AlertState::error("Stack cannot be empty");
        let mut term = TestTerminal::new();
        term.render_widget(AlertDialog::new(&alert), term.area());

        assert!(term.buffer_contains("Error"));
        assert!(term.buffer_contains("Stack cannot be empty"));
        assert!(term.buffer_contains("dismiss"));
    }

    #[test]
    fn test_alert_wraps_long_message() {
        let message = "Internal Server Error: ".repeat(8);
        let alert = AlertState::error(message.trim_end());
        let mut term = TestTerminal::new();
        term.render_widget(AlertDialog::new(&alert), term.area());

        assert!(term.buffer_contains("dismiss"));
    }

    #[test]
    fn test_confirm_shows_options() {
        let state = ConfirmDialogState::quit_confirmation();
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Quit ZTP console?"));
        assert!(term.buffer_contains("[y] Quit"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_prompt_shows_buffer() {
        let prompt = PromptState {
            kind: PromptKind::UploadPaths,
            buffer: "/tmp/a.bin /tmp/b.cfg".to_string(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(PromptDialog::new(&prompt), term.area());

        assert!(term.buffer_contains("Upload files"));
        assert!(term.buffer_contains("/tmp/a.bin /tmp/b.cfg"));
    }

    #[test]
    fn test_prompt_keeps_tail_of_long_input() {
        let prompt = PromptState {
            kind: PromptKind::ImportCsv,
            buffer: format!("{}/profiles.csv", "/very/deep".repeat(20)),
        };
        let mut term = TestTerminal::new();
        term.render_widget(PromptDialog::new(&prompt), term.area());

        assert!(term.buffer_contains("profiles.csv"));
    }

    #[test]
    fn test_picker_highlights_selection() {
        let options = vec![String::new(), "a.bin".to_string(), "b.bin".to_string()];
        let mut term = TestTerminal::new();
        term.render_widget(PickerDialog::new(&options, 1), term.area());

        assert!(term.buffer_contains("(none)"));
        assert!(term.buffer_contains("a.bin"));
        assert!(term.buffer_contains("b.bin"));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("short", 60), 1);
        assert_eq!(wrapped_height("a\nb\nc", 60), 3);
        assert_eq!(wrapped_height(&"x".repeat(100), 60), 3);
        assert_eq!(wrapped_height("", 60), 1);
    }
}
