//! Declarative field schema for profile groups.
//!
//! Every editable profile field is described once here: which widget edits
//! it, whether it must be non-empty, and which change hook fires when its
//! text is committed. Render and Reconstruct both read this table instead of
//! switching on field names.

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// A profile field. Discriminant order matches [`FIELD_SCHEMA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Stack,
    BaseUrl,
    Version,
    Install,
    Config,
    Subst,
    Save,
    Cli,
    Template,
}

/// Widget used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Boolean checkbox
    Toggle,
    /// Single-line text input
    Text,
    /// Auto-growing multi-line text
    TextArea,
    /// Free text plus a suggestion picker
    Combo,
    /// Ordered key/value rows
    KeyValue,
}

/// Side effect run when a field's text is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeHook {
    /// Extract a firmware version from the text into the group's `version`
    FillVersion,
}

/// Whether a group came from a stack record or the defaults record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Defaults,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub kind: WidgetKind,
    /// Reconstruct fails when a required key/value field collects no keys
    pub required: bool,
    pub on_change: Option<ChangeHook>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Schema
// ─────────────────────────────────────────────────────────────────────────────

const fn spec(
    field: Field,
    kind: WidgetKind,
    required: bool,
    on_change: Option<ChangeHook>,
) -> FieldSpec {
    FieldSpec {
        field,
        kind,
        required,
        on_change,
    }
}

pub const FIELD_SCHEMA: [FieldSpec; 9] = [
    spec(Field::Stack, WidgetKind::KeyValue, true, None),
    spec(Field::BaseUrl, WidgetKind::Text, false, None),
    spec(Field::Version, WidgetKind::Text, false, None),
    spec(
        Field::Install,
        WidgetKind::Combo,
        false,
        Some(ChangeHook::FillVersion),
    ),
    spec(Field::Config, WidgetKind::Combo, false, None),
    spec(Field::Subst, WidgetKind::KeyValue, false, None),
    spec(Field::Save, WidgetKind::Toggle, false, None),
    spec(Field::Cli, WidgetKind::TextArea, false, None),
    spec(Field::Template, WidgetKind::TextArea, false, None),
];

/// Fields shared by every group, in display order
const COMMON_FIELDS: [Field; 8] = [
    Field::BaseUrl,
    Field::Version,
    Field::Install,
    Field::Config,
    Field::Subst,
    Field::Save,
    Field::Cli,
    Field::Template,
];

impl Field {
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SCHEMA[self as usize]
    }

    pub fn kind(self) -> WidgetKind {
        self.spec().kind
    }

    /// JSON key of the field
    pub fn key(self) -> &'static str {
        match self {
            Field::Stack => "stack",
            Field::BaseUrl => "base_url",
            Field::Version => "version",
            Field::Install => "install",
            Field::Config => "config",
            Field::Subst => "subst",
            Field::Save => "save",
            Field::Cli => "cli",
            Field::Template => "template",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields rendered for a group, in display order.
///
/// Stack groups lead with the `stack` map.
pub fn fields_for(kind: GroupKind) -> impl Iterator<Item = Field> {
    let lead = match kind {
        GroupKind::Stack => Some(Field::Stack),
        GroupKind::Defaults => None,
    };
    lead.into_iter().chain(COMMON_FIELDS)
}
