//! Editable widgets that make up a profile group

use crate::schema::WidgetKind;
use crate::types::KeyValueMap;

/// Text areas grow with their content up to this many visible lines
pub const MAX_VISIBLE_LINES: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// TextArea
// ─────────────────────────────────────────────────────────────────────────────

/// Multi-line text whose visible height follows its line count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    pub text: String,
}

impl TextArea {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Height to render, between 1 and [`MAX_VISIBLE_LINES`]
    pub fn visible_lines(&self) -> usize {
        self.line_count().clamp(1, MAX_VISIBLE_LINES)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ComboBox
// ─────────────────────────────────────────────────────────────────────────────

/// Free-text input paired with a suggestion picker.
///
/// The first option is always blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboBox {
    pub text: String,
    options: Vec<String>,
}

impl ComboBox {
    pub fn new(text: impl Into<String>, suggestions: &[String]) -> Self {
        let mut combo = Self {
            text: text.into(),
            options: Vec::new(),
        };
        combo.set_options(suggestions);
        combo
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replace the picker options, leaving the typed text alone
    pub fn set_options(&mut self, suggestions: &[String]) {
        self.options.clear();
        self.options.push(String::new());
        self.options.extend(suggestions.iter().cloned());
    }

    /// Copy option `i` into the text. Returns false for an out-of-range index.
    pub fn select(&mut self, i: usize) -> bool {
        match self.options.get(i) {
            Some(option) => {
                self.text = option.clone();
                true
            }
            None => false,
        }
    }

    /// Position of the current text in the picker, if it is one of the options
    pub fn selected(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// KeyValueTable
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyValueColumn {
    Key,
    Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueRow {
    pub key: String,
    pub value: String,
}

impl KeyValueRow {
    pub fn cell(&self, column: KeyValueColumn) -> &str {
        match column {
            KeyValueColumn::Key => &self.key,
            KeyValueColumn::Value => &self.value,
        }
    }

    pub fn cell_mut(&mut self, column: KeyValueColumn) -> &mut String {
        match column {
            KeyValueColumn::Key => &mut self.key,
            KeyValueColumn::Value => &mut self.value,
        }
    }
}

/// Ordered key/value rows. Never holds zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueTable {
    rows: Vec<KeyValueRow>,
}

impl Default for KeyValueTable {
    fn default() -> Self {
        Self {
            rows: vec![KeyValueRow::default()],
        }
    }
}

impl KeyValueTable {
    /// Build rows from a map; a missing or empty map yields one blank row
    pub fn from_map(map: Option<&KeyValueMap>) -> Self {
        let rows: Vec<KeyValueRow> = map
            .into_iter()
            .flat_map(|m| m.iter())
            .map(|(k, v)| KeyValueRow {
                key: k.to_string(),
                value: v.to_string(),
            })
            .collect();

        if rows.is_empty() {
            Self::default()
        } else {
            Self { rows }
        }
    }

    pub fn rows(&self) -> &[KeyValueRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut KeyValueRow> {
        self.rows.get_mut(row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Insert one blank row directly below `row`.
    ///
    /// Returns the position of the new row, or `None` if `row` is out of range.
    pub fn insert_below(&mut self, row: usize) -> Option<usize> {
        if row >= self.rows.len() {
            return None;
        }
        self.rows.insert(row + 1, KeyValueRow::default());
        Some(row + 1)
    }

    /// Remove `row` unless it is the last one left
    pub fn remove(&mut self, row: usize) -> bool {
        if self.rows.len() <= 1 || row >= self.rows.len() {
            return false;
        }
        self.rows.remove(row);
        true
    }

    /// Rows with a non-blank key, in order. Later duplicates win.
    pub fn collect(&self) -> KeyValueMap {
        self.rows
            .iter()
            .filter(|r| !r.key.trim().is_empty())
            .map(|r| (r.key.clone(), r.value.clone()))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Toggle(bool),
    Text(String),
    TextArea(TextArea),
    Combo(ComboBox),
    KeyValue(KeyValueTable),
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Toggle(_) => WidgetKind::Toggle,
            Widget::Text(_) => WidgetKind::Text,
            Widget::TextArea(_) => WidgetKind::TextArea,
            Widget::Combo(_) => WidgetKind::Combo,
            Widget::KeyValue(_) => WidgetKind::KeyValue,
        }
    }

    /// Current text for single-value widgets
    pub fn text(&self) -> Option<&str> {
        match self {
            Widget::Text(s) => Some(s),
            Widget::TextArea(area) => Some(&area.text),
            Widget::Combo(combo) => Some(&combo.text),
            Widget::Toggle(_) | Widget::KeyValue(_) => None,
        }
    }

    /// Replace the text of a single-value widget. Returns false for other kinds.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match self {
            Widget::Text(s) => *s = text.into(),
            Widget::TextArea(area) => area.text = text.into(),
            Widget::Combo(combo) => combo.text = text.into(),
            Widget::Toggle(_) | Widget::KeyValue(_) => return false,
        }
        true
    }
}
