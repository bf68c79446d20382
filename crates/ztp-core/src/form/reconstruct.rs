//! Widgets → records

use std::collections::BTreeMap;

use thiserror::Error;

use super::{ProfileGroup, Widget};
use crate::error::Error;
use crate::schema::Field;
use crate::types::{KeyValueMap, ProfileList, ProfileRecord};

/// Reconstruction failed before anything was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Stack cannot be empty")]
    EmptyStack { index: usize },
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::validation(err.to_string())
    }
}

pub(super) fn reconstruct(groups: &[ProfileGroup]) -> Result<ProfileList, ValidationError> {
    // Keyed by sequence index: ascending order, removed groups leave no gaps
    let mut records: BTreeMap<usize, ProfileRecord> = BTreeMap::new();

    for group in groups {
        let record = records.entry(group.index).or_default();
        for row in &group.rows {
            match &row.widget {
                Widget::Toggle(checked) => {
                    if row.field == Field::Save {
                        record.save = *checked;
                    }
                }
                Widget::KeyValue(table) => {
                    let map = table.collect();
                    if map.is_empty() {
                        if row.field.spec().required {
                            return Err(ValidationError::EmptyStack { index: group.index });
                        }
                        continue;
                    }
                    set_map(record, row.field, map);
                }
                Widget::Text(_) | Widget::TextArea(_) | Widget::Combo(_) => {
                    let text = row.widget.text().unwrap_or_default();
                    if !text.is_empty() {
                        set_text(record, row.field, text.to_string());
                    }
                }
            }
        }
    }

    Ok(records.into_values().collect())
}

fn set_map(record: &mut ProfileRecord, field: Field, map: KeyValueMap) {
    match field {
        Field::Stack => record.stack = Some(map),
        Field::Subst => record.subst = Some(map),
        _ => {}
    }
}

fn set_text(record: &mut ProfileRecord, field: Field, text: String) {
    let slot = match field {
        Field::BaseUrl => &mut record.base_url,
        Field::Version => &mut record.version,
        Field::Install => &mut record.install,
        Field::Config => &mut record.config,
        Field::Cli => &mut record.cli,
        Field::Template => &mut record.template,
        Field::Stack | Field::Subst | Field::Save => return,
    };
    *slot = Some(text);
}
