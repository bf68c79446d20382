//! Profile editor model.
//!
//! A [`ProfileForm`] is the editable widget tree for a [`ProfileList`]. Each
//! record becomes one [`ProfileGroup`] tagged with a sequence index taken from
//! a caller-owned [`RenderSession`]. Between load and save the form is the only
//! source of truth; [`ProfileForm::reconstruct`] flattens it back into records.

mod reconstruct;
mod widgets;

pub use reconstruct::ValidationError;
pub use widgets::{
    ComboBox, KeyValueColumn, KeyValueRow, KeyValueTable, TextArea, Widget, MAX_VISIBLE_LINES,
};

use crate::schema::{fields_for, ChangeHook, Field, GroupKind, WidgetKind};
use crate::types::{ProfileList, ProfileRecord};
use crate::version::extract_version;

// ─────────────────────────────────────────────────────────────────────────────
// RenderSession / NodeId
// ─────────────────────────────────────────────────────────────────────────────

/// Hands out group sequence indices.
///
/// Indices increase monotonically and are never reused until [`reset`] is
/// called at the start of a full reload.
///
/// [`reset`]: RenderSession::reset
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    next: usize,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Address of a widget group inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Defaults { index: usize },
    Stack { index: usize },
    Nested { index: usize, field: Field },
}

impl NodeId {
    pub fn index(&self) -> usize {
        match *self {
            NodeId::Defaults { index } | NodeId::Stack { index } | NodeId::Nested { index, .. } => {
                index
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ProfileGroup
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: Field,
    pub widget: Widget,
}

/// Widgets rendered for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileGroup {
    pub index: usize,
    pub kind: GroupKind,
    pub rows: Vec<FieldRow>,
}

impl ProfileGroup {
    fn render(index: usize, record: &ProfileRecord, suggestions: &[String]) -> Self {
        let kind = if record.is_stack() {
            GroupKind::Stack
        } else {
            GroupKind::Defaults
        };

        let rows = fields_for(kind)
            .map(|field| FieldRow {
                field,
                widget: widget_for(field, record, suggestions),
            })
            .collect();

        Self { index, kind, rows }
    }

    pub fn is_stack(&self) -> bool {
        self.kind == GroupKind::Stack
    }

    pub fn node_id(&self) -> NodeId {
        match self.kind {
            GroupKind::Defaults => NodeId::Defaults { index: self.index },
            GroupKind::Stack => NodeId::Stack { index: self.index },
        }
    }

    /// The group's own id followed by one id per key/value field
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.node_id()).chain(
            self.rows
                .iter()
                .filter(|r| r.widget.kind() == WidgetKind::KeyValue)
                .map(move |r| NodeId::Nested {
                    index: self.index,
                    field: r.field,
                }),
        )
    }

    pub fn widget(&self, field: Field) -> Option<&Widget> {
        self.rows.iter().find(|r| r.field == field).map(|r| &r.widget)
    }

    pub fn widget_mut(&mut self, field: Field) -> Option<&mut Widget> {
        self.rows
            .iter_mut()
            .find(|r| r.field == field)
            .map(|r| &mut r.widget)
    }

    fn key_values_mut(&mut self, field: Field) -> Option<&mut KeyValueTable> {
        match self.widget_mut(field)? {
            Widget::KeyValue(table) => Some(table),
            _ => None,
        }
    }

    fn run_hook(&mut self, field: Field) {
        let Some(ChangeHook::FillVersion) = field.spec().on_change else {
            return;
        };
        let Some(version) = self.widget(field).and_then(Widget::text).and_then(extract_version)
        else {
            return;
        };
        if let Some(widget) = self.widget_mut(Field::Version) {
            widget.set_text(version);
        }
    }
}

fn widget_for(field: Field, record: &ProfileRecord, suggestions: &[String]) -> Widget {
    let text = || text_value(field, record).unwrap_or_default().to_string();
    match field.kind() {
        WidgetKind::Toggle => Widget::Toggle(record.save),
        WidgetKind::Text => Widget::Text(text()),
        WidgetKind::TextArea => Widget::TextArea(TextArea::new(text())),
        WidgetKind::Combo => Widget::Combo(ComboBox::new(text(), suggestions)),
        WidgetKind::KeyValue => {
            let map = match field {
                Field::Stack => record.stack.as_ref(),
                _ => record.subst.as_ref(),
            };
            Widget::KeyValue(KeyValueTable::from_map(map))
        }
    }
}

fn text_value(field: Field, record: &ProfileRecord) -> Option<&str> {
    match field {
        Field::BaseUrl => record.base_url.as_deref(),
        Field::Version => record.version.as_deref(),
        Field::Install => record.install.as_deref(),
        Field::Config => record.config.as_deref(),
        Field::Cli => record.cli.as_deref(),
        Field::Template => record.template.as_deref(),
        Field::Stack | Field::Subst | Field::Save => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ProfileForm
// ─────────────────────────────────────────────────────────────────────────────

/// The editable widget tree for a profile list
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    groups: Vec<ProfileGroup>,
    suggestions: Vec<String>,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every group and render `records` from index zero
    pub fn load(&mut self, records: &[ProfileRecord], session: &mut RenderSession) {
        session.reset();
        self.groups.clear();
        self.append(records, session);
    }

    /// Render `records` after the existing groups, one group each
    pub fn append(&mut self, records: &[ProfileRecord], session: &mut RenderSession) {
        for record in records {
            let index = session.next_index();
            self.groups
                .push(ProfileGroup::render(index, record, &self.suggestions));
        }
    }

    /// Append one empty stack group. Returns its sequence index.
    pub fn add_stack(&mut self, session: &mut RenderSession) -> usize {
        let index = session.next_index();
        self.groups.push(ProfileGroup::render(
            index,
            &ProfileRecord::empty_stack(),
            &self.suggestions,
        ));
        index
    }

    /// Remove a stack group. Defaults groups cannot be removed.
    pub fn remove_stack(&mut self, index: usize) -> bool {
        match self.groups.iter().position(|g| g.index == index) {
            Some(pos) if self.groups[pos].is_stack() => {
                self.groups.remove(pos);
                true
            }
            _ => false,
        }
    }

    pub fn groups(&self) -> &[ProfileGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, index: usize) -> Option<&ProfileGroup> {
        self.groups.iter().find(|g| g.index == index)
    }

    fn group_mut(&mut self, index: usize) -> Option<&mut ProfileGroup> {
        self.groups.iter_mut().find(|g| g.index == index)
    }

    /// Every addressable node, in display order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.groups.iter().flat_map(ProfileGroup::node_ids)
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Refresh every picker with `names`, keeping typed text.
    ///
    /// Idempotent, and a no-op on an empty form apart from remembering the
    /// names for groups rendered later.
    pub fn sync_suggestions(&mut self, names: &[String]) {
        self.suggestions = names.to_vec();
        for row in self.groups.iter_mut().flat_map(|g| g.rows.iter_mut()) {
            if let Widget::Combo(combo) = &mut row.widget {
                combo.set_options(names);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────

    /// Commit text into a text, text area or combo field and run its hook
    pub fn commit_text(&mut self, index: usize, field: Field, text: impl Into<String>) -> bool {
        let Some(group) = self.group_mut(index) else {
            return false;
        };
        let Some(widget) = group.widget_mut(field) else {
            return false;
        };
        if !widget.set_text(text) {
            return false;
        }
        group.run_hook(field);
        true
    }

    /// Pick suggestion `option` in a combo field and run its hook
    pub fn select_suggestion(&mut self, index: usize, field: Field, option: usize) -> bool {
        let Some(group) = self.group_mut(index) else {
            return false;
        };
        let selected = match group.widget_mut(field) {
            Some(Widget::Combo(combo)) => combo.select(option),
            _ => false,
        };
        if selected {
            group.run_hook(field);
        }
        selected
    }

    /// Flip a toggle field
    pub fn toggle(&mut self, index: usize, field: Field) -> bool {
        match self.group_mut(index).and_then(|g| g.widget_mut(field)) {
            Some(Widget::Toggle(checked)) => {
                *checked = !*checked;
                true
            }
            _ => false,
        }
    }

    /// Set one cell of a key/value field
    pub fn set_cell(
        &mut self,
        index: usize,
        field: Field,
        row: usize,
        column: KeyValueColumn,
        text: impl Into<String>,
    ) -> bool {
        let cell = self
            .group_mut(index)
            .and_then(|g| g.key_values_mut(field))
            .and_then(|t| t.row_mut(row));
        match cell {
            Some(r) => {
                *r.cell_mut(column) = text.into();
                true
            }
            None => false,
        }
    }

    /// Insert a blank key/value row below `row`; returns the new row's position
    pub fn insert_row_below(&mut self, index: usize, field: Field, row: usize) -> Option<usize> {
        self.group_mut(index)?
            .key_values_mut(field)?
            .insert_below(row)
    }

    /// Remove a key/value row unless it is the last one
    pub fn remove_row(&mut self, index: usize, field: Field, row: usize) -> bool {
        self.group_mut(index)
            .and_then(|g| g.key_values_mut(field))
            .is_some_and(|t| t.remove(row))
    }

    /// Flatten the form back into records
    pub fn reconstruct(&self) -> Result<ProfileList, ValidationError> {
        reconstruct::reconstruct(&self.groups)
    }
}
