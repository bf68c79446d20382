//! Configuration file parsing for the ZTP console
//!
//! Settings live in `<config_dir>/ztp-console/config.toml`; `--config`
//! points somewhere else.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, save_settings};
pub use types::*;
