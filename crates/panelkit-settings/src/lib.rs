//! PanelKit Settings Crate
//!
//! Handles application configuration: export defaults, the default canvas
//! used when a scene file is re-exported, and logging preferences.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, LoggingSettings, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
