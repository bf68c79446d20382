//! Profile editor panel
//!
//! Draws the widget tree of a [`ProfileForm`] as a scrolling list of lines:
//! one header per group, one line per field, one line per key/value row and
//! the stack buttons. The focused target is highlighted and kept in view; an
//! open edit buffer replaces the text of the target it edits.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use ztp_app::editor_state::{EditBuffer, EditorState, FocusTarget};
use ztp_core::{
    Field, GroupKind, KeyValueColumn, KeyValueTable, ProfileForm, ProfileGroup, Widget as FormWidget,
    MAX_VISIBLE_LINES,
};

use crate::theme::styles;

/// Width of the field label column
const LABEL_WIDTH: usize = 10;

/// Width of a key cell in key/value rows
const KEY_WIDTH: usize = 16;

const CURSOR: &str = "▏";

/// Rendered lines plus the line holding the focused target
struct EditorLines {
    lines: Vec<Line<'static>>,
    focus_line: Option<usize>,
}

impl EditorLines {
    fn push(&mut self, line: Line<'static>, focused: bool) {
        if focused && self.focus_line.is_none() {
            self.focus_line = Some(self.lines.len());
        }
        self.lines.push(line);
    }
}

/// The Profiles tab body
pub struct ProfileEditor<'a> {
    form: &'a ProfileForm,
    editor: &'a EditorState,
    loading: bool,
}

impl<'a> ProfileEditor<'a> {
    pub fn new(form: &'a ProfileForm, editor: &'a EditorState) -> Self {
        Self {
            form,
            editor,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn build_lines(&self) -> EditorLines {
        let focus = self.editor.focused(self.form);
        let mut out = EditorLines {
            lines: Vec::new(),
            focus_line: None,
        };

        let mut stack_number = 0;
        for group in self.form.groups() {
            let title = match group.kind {
                GroupKind::Defaults => "Defaults".to_string(),
                GroupKind::Stack => {
                    stack_number += 1;
                    format!("Stack #{stack_number}")
                }
            };
            if !out.lines.is_empty() {
                out.push(Line::default(), false);
            }
            out.push(
                Line::from(vec![
                    Span::styled("── ", styles::text_muted()),
                    Span::styled(title, styles::accent_bold()),
                    Span::styled(" ──", styles::text_muted()),
                ]),
                false,
            );
            self.push_group(group, focus, &mut out);
        }

        out.push(Line::default(), false);
        let focused = focus == Some(FocusTarget::AddStack);
        out.push(button_line("Add Stack", focused), focused);
        out
    }

    fn push_group(&self, group: &ProfileGroup, focus: Option<FocusTarget>, out: &mut EditorLines) {
        for row in &group.rows {
            let target = FocusTarget::Field {
                index: group.index,
                field: row.field,
            };
            let focused = focus == Some(target);
            let edit = self.edit_for(target);

            match &row.widget {
                FormWidget::Toggle(on) => {
                    let mark = if *on { "[x]" } else { "[ ]" };
                    out.push(field_line(row.field, value_span(mark, focused)), focused);
                }
                FormWidget::Text(text) => {
                    let span = match edit {
                        Some(edit) => edit_span(&edit.text),
                        None => value_span(text, focused),
                    };
                    out.push(field_line(row.field, span), focused);
                }
                FormWidget::Combo(combo) => {
                    let mut line = match edit {
                        Some(edit) => field_line(row.field, edit_span(&edit.text)),
                        None => field_line(row.field, value_span(&combo.text, focused)),
                    };
                    line.push_span(Span::styled(" ▾", styles::text_muted()));
                    out.push(line, focused);
                }
                FormWidget::TextArea(area) => {
                    let text = edit.map_or(area.text.as_str(), |e| e.text.as_str());
                    push_text_area(row.field, text, focused, edit.is_some(), out);
                }
                FormWidget::KeyValue(table) => {
                    self.push_key_values(group.index, row.field, table, focus, out);
                }
            }
        }

        if group.is_stack() {
            let focused = focus == Some(FocusTarget::RemoveStack { index: group.index });
            out.push(button_line("Remove Stack", focused), focused);
        }
    }

    fn push_key_values(
        &self,
        index: usize,
        field: Field,
        table: &KeyValueTable,
        focus: Option<FocusTarget>,
        out: &mut EditorLines,
    ) {
        out.push(field_line(field, Span::raw("")), false);
        for (row, entry) in table.rows().iter().enumerate() {
            let mut spans = vec![Span::raw(" ".repeat(LABEL_WIDTH + 2))];
            let mut focused_row = false;
            for column in [KeyValueColumn::Key, KeyValueColumn::Value] {
                let target = FocusTarget::Entry {
                    index,
                    field,
                    row,
                    column,
                };
                let focused = focus == Some(target);
                focused_row |= focused;
                let span = match self.edit_for(target) {
                    Some(edit) => edit_span(&edit.text),
                    None => {
                        let text = entry.cell(column);
                        let shown = if text.is_empty() { "·" } else { text };
                        value_span(shown, focused)
                    }
                };
                let width = span.content.width();
                spans.push(span);
                if column == KeyValueColumn::Key {
                    spans.push(Span::raw(" ".repeat(KEY_WIDTH.saturating_sub(width))));
                    spans.push(Span::styled(" = ", styles::text_muted()));
                }
            }
            out.push(Line::from(spans), focused_row);
        }
    }

    fn edit_for(&self, target: FocusTarget) -> Option<&'a EditBuffer> {
        self.editor.edit.as_ref().filter(|edit| edit.target == target)
    }
}

fn field_line(field: Field, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", field.key(), width = LABEL_WIDTH),
            styles::text_secondary(),
        ),
        value,
    ])
}

fn value_span(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        styles::focused_selected()
    } else {
        styles::text_primary()
    };
    // Keep an empty focused value visible
    let text = if text.is_empty() && focused { " " } else { text };
    Span::styled(text.to_string(), style)
}

fn edit_span(text: &str) -> Span<'static> {
    Span::styled(format!("{text}{CURSOR}"), styles::editing())
}

fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::focused_selected()
    } else {
        styles::accent()
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

/// Text areas show between one and [`MAX_VISIBLE_LINES`] lines
fn push_text_area(field: Field, text: &str, focused: bool, editing: bool, out: &mut EditorLines) {
    let lines: Vec<&str> = text.split('\n').collect();
    let visible = lines.len().clamp(1, MAX_VISIBLE_LINES);
    // While editing the cursor sits on the last line, so show the tail
    let start = if editing { lines.len() - visible } else { 0 };

    let style = match (editing, focused) {
        (true, _) => styles::editing(),
        (false, true) => styles::focused_selected(),
        (false, false) => styles::text_primary(),
    };
    for (i, content) in lines.iter().enumerate().skip(start).take(visible) {
        let mut content = content.to_string();
        if editing && i + 1 == lines.len() {
            content.push_str(CURSOR);
        } else if content.is_empty() && focused {
            content.push(' ');
        }
        let label = if i == start { field.key() } else { "" };
        let line = Line::from(vec![
            Span::styled(
                format!("  {label:<width$}", width = LABEL_WIDTH),
                styles::text_secondary(),
            ),
            Span::styled(content, style),
        ]);
        out.push(line, focused);
    }
    let hidden = lines.len() - visible;
    if hidden > 0 && !editing {
        out.push(
            Line::from(Span::styled(
                format!("{}… {hidden} more lines", " ".repeat(LABEL_WIDTH + 2)),
                styles::text_muted(),
            )),
            false,
        );
    }
}

impl Widget for ProfileEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading {
            " Profiles (loading…) "
        } else {
            " Profiles "
        };
        let block = styles::glass_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let EditorLines { lines, focus_line } = self.build_lines();
        let height = inner.height as usize;
        // Scroll just far enough to keep the focused line on screen
        let offset = focus_line
            .map(|line| (line + 1).saturating_sub(height))
            .unwrap_or(0);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ztp_app::editor_state::focus_targets;
    use ztp_core::{KeyValueMap, ProfileRecord, RenderSession};

    fn form_with(records: &[ProfileRecord]) -> ProfileForm {
        let mut form = ProfileForm::new();
        let mut session = RenderSession::new();
        form.load(records, &mut session);
        form
    }

    fn sample_records() -> Vec<ProfileRecord> {
        vec![
            ProfileRecord {
                base_url: Some("http://ztp.lab".to_string()),
                save: true,
                ..ProfileRecord::default()
            },
            ProfileRecord {
                stack: Some(KeyValueMap::from_iter([("1", "SERIAL-A")])),
                install: Some("cat9k_iosxe.17.09.04a.SPA.bin".to_string()),
                ..ProfileRecord::default()
            },
        ]
    }

    fn render(form: &ProfileForm, editor: &EditorState, height: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, height);
        term.render_widget(ProfileEditor::new(form, editor), term.area());
        term
    }

    #[test]
    fn test_renders_group_headers_and_fields() {
        let form = form_with(&sample_records());
        let term = render(&form, &EditorState::default(), 60);

        assert!(term.buffer_contains("Defaults"));
        assert!(term.buffer_contains("Stack #1"));
        assert!(term.buffer_contains("http://ztp.lab"));
        assert!(term.buffer_contains("[x]"));
        assert!(term.buffer_contains("SERIAL-A"));
        assert!(term.buffer_contains("cat9k_iosxe.17.09.04a.SPA.bin"));
        assert!(term.buffer_contains("[ Remove Stack ]"));
        assert!(term.buffer_contains("[ Add Stack ]"));
    }

    #[test]
    fn test_defaults_group_has_no_remove_button() {
        let form = form_with(&[ProfileRecord::default()]);
        let term = render(&form, &EditorState::default(), 40);

        assert!(term.buffer_contains("Defaults"));
        assert!(!term.buffer_contains("Remove Stack"));
        assert!(!term.buffer_contains("Stack #"));
    }

    #[test]
    fn test_edit_buffer_replaces_value() {
        let form = form_with(&sample_records());
        let mut editor = EditorState::default();
        let target = FocusTarget::Field {
            index: 0,
            field: Field::BaseUrl,
        };
        assert!(editor.focus_on(&form, target));
        assert!(editor.begin_edit(&form));
        if let Some(edit) = editor.edit.as_mut() {
            edit.text = "http://new.host".to_string();
        }

        let term = render(&form, &editor, 60);
        assert!(term.buffer_contains("http://new.host▏"));
        assert!(!term.buffer_contains("http://ztp.lab"));
    }

    #[test]
    fn test_text_area_grows_to_max_lines() {
        let cli: String = (1..=14)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let form = form_with(&[ProfileRecord {
            cli: Some(cli),
            ..ProfileRecord::default()
        }]);
        let term = render(&form, &EditorState::default(), 60);

        assert!(term.buffer_contains("line 10"));
        assert!(!term.buffer_contains("line 11"));
        assert!(term.buffer_contains("4 more lines"));
    }

    #[test]
    fn test_scrolls_to_focused_target() {
        let mut records = sample_records();
        for i in 0..6 {
            records.push(ProfileRecord {
                stack: Some(KeyValueMap::from_iter([("1", format!("S{i}"))])),
                ..ProfileRecord::default()
            });
        }
        let form = form_with(&records);
        let mut editor = EditorState::default();
        editor.focus_last(&form);
        assert_eq!(
            focus_targets(&form).last(),
            Some(&FocusTarget::AddStack)
        );

        let term = render(&form, &editor, 20);
        assert!(term.buffer_contains("[ Add Stack ]"));
        assert!(!term.buffer_contains("Defaults"));
    }

    #[test]
    fn test_empty_cells_show_placeholder() {
        let form = form_with(&[ProfileRecord::empty_stack()]);
        let term = render(&form, &EditorState::default(), 40);
        assert!(term.buffer_contains("·"));
    }
}
