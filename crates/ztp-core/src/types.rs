//! Domain types exchanged with the ZTP backend

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// KeyValueMap
// ─────────────────────────────────────────────────────────────────────────────

/// Insertion-ordered string map, serialized as a JSON object.
///
/// Used for the `subst` and `stack` fields. Inserting a key that already
/// exists replaces its value without moving it. Numeric and boolean values
/// are read as their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueMap(#[serde(deserialize_with = "text_values")] IndexMap<String, String>);

impl KeyValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn text_values<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, String>, D::Error> {
    let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, value_text(v))).collect())
}

/// A present `"stack"` key marks a stack record, even when its value is null
fn present_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<KeyValueMap>, D::Error> {
    Ok(Some(Option::<KeyValueMap>::deserialize(deserializer)?.unwrap_or_default()))
}

// ─────────────────────────────────────────────────────────────────────────────
// ProfileRecord
// ─────────────────────────────────────────────────────────────────────────────

/// One provisioning profile.
///
/// A record carrying `stack` is a stack record; the one without is the
/// defaults record. Empty strings, empty maps and `save: false` are never
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(
        default,
        deserialize_with = "present_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub stack: Option<KeyValueMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subst: Option<KeyValueMap>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub save: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl ProfileRecord {
    /// An empty stack record, as created by "Add Stack"
    pub fn empty_stack() -> Self {
        Self {
            stack: Some(KeyValueMap::new()),
            ..Self::default()
        }
    }

    pub fn is_stack(&self) -> bool {
        self.stack.is_some()
    }
}

/// Ordered list of profiles as served by `GET /data`
pub type ProfileList = Vec<ProfileRecord>;

/// Make sure the list has a defaults record, inserting an empty one at the
/// front when every record is a stack.
///
/// Returns true when a record was inserted.
pub fn ensure_defaults(list: &mut ProfileList) -> bool {
    if list.iter().any(|r| !r.is_stack()) {
        return false;
    }
    list.insert(0, ProfileRecord::default());
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// FileEntry / LogEntry
// ─────────────────────────────────────────────────────────────────────────────

/// A file served by the backend, as listed by `GET /list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub file: String,
    #[serde(deserialize_with = "string_or_number")]
    pub size: String,
}

/// A provisioning log record, as listed by `GET /log`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub ip: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub serial: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub version: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logbuf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli: Option<String>,
}

impl LogEntry {
    /// Whether the entry has long-text detail to show on demand
    pub fn has_detail(&self) -> bool {
        self.logbuf.as_deref().is_some_and(|s| !s.is_empty())
            || self.cli.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Accept a JSON string, number, bool or null and keep its textual form.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    serde_json::Value::deserialize(deserializer).map(value_text)
}

fn value_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
