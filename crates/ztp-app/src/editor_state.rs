//! Profile editor view state: focus, in-progress text edits and the
//! suggestion picker.
//!
//! Focus is kept as a position into [`focus_targets`], which is derived from
//! the form on demand so it can never point at a removed widget for longer
//! than one [`EditorState::clamp`].

use ztp_core::{Field, KeyValueColumn, ProfileForm, Widget, WidgetKind};

/// Something the cursor can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// A single-widget field row
    Field { index: usize, field: Field },
    /// One cell of a key/value row
    Entry {
        index: usize,
        field: Field,
        row: usize,
        column: KeyValueColumn,
    },
    /// "Remove Stack" button of a stack group
    RemoveStack { index: usize },
    /// Trailing "Add Stack" button
    AddStack,
}

impl FocusTarget {
    /// Sequence index of the owning group
    pub fn group_index(&self) -> Option<usize> {
        match *self {
            FocusTarget::Field { index, .. }
            | FocusTarget::Entry { index, .. }
            | FocusTarget::RemoveStack { index } => Some(index),
            FocusTarget::AddStack => None,
        }
    }
}

/// All focus targets in display order
pub fn focus_targets(form: &ProfileForm) -> Vec<FocusTarget> {
    let mut targets = Vec::new();
    for group in form.groups() {
        let index = group.index;
        for row in &group.rows {
            match &row.widget {
                Widget::KeyValue(table) => {
                    for r in 0..table.len() {
                        for column in [KeyValueColumn::Key, KeyValueColumn::Value] {
                            targets.push(FocusTarget::Entry {
                                index,
                                field: row.field,
                                row: r,
                                column,
                            });
                        }
                    }
                }
                _ => targets.push(FocusTarget::Field {
                    index,
                    field: row.field,
                }),
            }
        }
        if group.is_stack() {
            targets.push(FocusTarget::RemoveStack { index });
        }
    }
    targets.push(FocusTarget::AddStack);
    targets
}

/// Text being typed into a field or cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub target: FocusTarget,
    pub text: String,
    /// Text areas take newlines; Esc commits instead of cancelling
    pub multiline: bool,
}

/// Open suggestion picker on a combo field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub index: usize,
    pub field: Field,
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Position into [`focus_targets`]
    pub focus: usize,
    pub edit: Option<EditBuffer>,
    pub picker: Option<PickerState>,
}

impl EditorState {
    pub fn focused(&self, form: &ProfileForm) -> Option<FocusTarget> {
        focus_targets(form).get(self.focus).copied()
    }

    pub fn focus_next(&mut self, form: &ProfileForm) {
        let len = focus_targets(form).len();
        if self.focus + 1 < len {
            self.focus += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_first(&mut self) {
        self.focus = 0;
    }

    pub fn focus_last(&mut self, form: &ProfileForm) {
        self.focus = focus_targets(form).len().saturating_sub(1);
    }

    /// Move focus to `target` if it exists
    pub fn focus_on(&mut self, form: &ProfileForm, target: FocusTarget) -> bool {
        match focus_targets(form).iter().position(|t| *t == target) {
            Some(pos) => {
                self.focus = pos;
                true
            }
            None => false,
        }
    }

    /// Keep focus inside the target list after the form shrank
    pub fn clamp(&mut self, form: &ProfileForm) {
        let len = focus_targets(form).len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start editing the focused text field or key/value cell
    pub fn begin_edit(&mut self, form: &ProfileForm) -> bool {
        let Some(target) = self.focused(form) else {
            return false;
        };
        let edit = match target {
            FocusTarget::Field { index, field } => {
                let Some(widget) = form.group(index).and_then(|g| g.widget(field)) else {
                    return false;
                };
                widget.text().map(|text| EditBuffer {
                    target,
                    text: text.to_string(),
                    multiline: widget.kind() == WidgetKind::TextArea,
                })
            }
            FocusTarget::Entry {
                index,
                field,
                row,
                column,
            } => match form.group(index).and_then(|g| g.widget(field)) {
                Some(Widget::KeyValue(table)) => table.rows().get(row).map(|r| EditBuffer {
                    target,
                    text: r.cell(column).to_string(),
                    multiline: false,
                }),
                _ => None,
            },
            FocusTarget::RemoveStack { .. } | FocusTarget::AddStack => None,
        };

        self.edit = edit;
        self.edit.is_some()
    }

    /// Open the picker on the focused combo field
    pub fn open_picker(&mut self, form: &ProfileForm) -> bool {
        let Some(FocusTarget::Field { index, field }) = self.focused(form) else {
            return false;
        };
        match form.group(index).and_then(|g| g.widget(field)) {
            Some(Widget::Combo(combo)) => {
                self.picker = Some(PickerState {
                    index,
                    field,
                    selected: combo.selected().unwrap_or(0),
                });
                true
            }
            _ => false,
        }
    }

    /// Number of options in the open picker
    pub fn picker_len(&self, form: &ProfileForm) -> usize {
        let Some(picker) = self.picker else {
            return 0;
        };
        match form.group(picker.index).and_then(|g| g.widget(picker.field)) {
            Some(Widget::Combo(combo)) => combo.options().len(),
            _ => 0,
        }
    }
}
