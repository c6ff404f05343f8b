//! Configuration file parsing for the account console
//!
//! Supports `<config_dir>/acctui/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_or_init_settings, load_settings, save_settings};
pub use types::*;
