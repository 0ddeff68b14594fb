//! # PanelKit
//!
//! Exports control-panel layouts for manufacturing and interchange:
//! - Scene JSON (lossless, re-importable)
//! - SVG with native rounded rectangles
//! - DXF polylines for CAD/CAM
//! - Single-page vector PDF
//!
//! ## Architecture
//!
//! PanelKit is organized as a workspace with multiple crates:
//!
//! 1. **panelkit-core** - Layout model, units, element factory, errors
//! 2. **panelkit-export** - Geometry, format encoders, export dispatcher
//! 3. **panelkit-settings** - Configuration files and validation
//! 4. **panelkit** - This facade plus the `panelkit` command-line tool
//!
//! Encoders produce in-memory [`ExportPayload`]s; a [`PayloadSink`] decides
//! where they end up.

use anyhow::Context;
use std::path::{Path, PathBuf};

pub use panelkit_core::{
    create_element, ControlElement, ElementBuilder, Error, ExportError, ExportFormat,
    LayoutCanvas, LayoutSettings, LayoutSnapshot, Result, Units, ValidationError,
};
pub use panelkit_export::{
    export_layout, parse_layout_json, read_layout_json_file, sanitize_filename, ExportOptions,
    ExportPayload, LayoutJsonPayload,
};
pub use panelkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string shown by `panelkit --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Initialize logging
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, falling back to `default_level`
/// - Human-readable output, or JSON lines when `json` is set
/// - Output on stderr so stdout stays free for command results
pub fn init_logging(default_level: &str, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level '{}'", default_level))?;

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Destination for encoded exports
pub trait PayloadSink {
    /// Persist the payload and return where it went
    fn save(&self, payload: &ExportPayload) -> anyhow::Result<PathBuf>;
}

/// Writes payloads as files into a directory, creating it if needed
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PayloadSink for DirectorySink {
    fn save(&self, payload: &ExportPayload) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.dir.join(&payload.filename);
        std::fs::write(&path, &payload.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(path = %path.display(), bytes = payload.bytes.len(), "Saved export");
        Ok(path)
    }
}
