//! # ztp-core - Core Domain Types
//!
//! Foundation crate for the ZTP console. Provides the profile data model,
//! error handling, logging setup and the profile editor model.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ProfileRecord`] - One provisioning profile (defaults or stack)
//! - [`KeyValueMap`] - Insertion-ordered string map used by `subst` and `stack`
//! - [`FileEntry`], [`LogEntry`] - File listing and provisioning log rows
//!
//! ### Field Schema (`schema`)
//! - [`Field`], [`FieldSpec`], [`FIELD_SCHEMA`] - Field → widget table
//!
//! ### Profile Editor (`form`)
//! - [`ProfileForm`] - Editable widget tree with Render / Reconstruct
//! - [`RenderSession`] - Sequence index allocator
//! - [`NodeId`] - Typed address of a widget group
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use ztp_core::prelude::*;
//! ```

pub mod error;
pub mod form;
pub mod logging;
pub mod prelude;
pub mod schema;
pub mod types;
pub mod version;

pub use error::{Error, Result, ResultExt};
pub use form::{
    ComboBox, FieldRow, KeyValueColumn, KeyValueRow, KeyValueTable, NodeId, ProfileForm,
    ProfileGroup, RenderSession, TextArea, ValidationError, Widget, MAX_VISIBLE_LINES,
};
pub use schema::{
    fields_for, ChangeHook, Field, FieldSpec, GroupKind, WidgetKind, FIELD_SCHEMA,
};
pub use types::{ensure_defaults, FileEntry, KeyValueMap, LogEntry, ProfileList, ProfileRecord};
pub use version::extract_version;
