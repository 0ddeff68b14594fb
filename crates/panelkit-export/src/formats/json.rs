//! Scene-JSON encoding and import.
//!
//! The scene file carries elements and settings exactly as authored (scene
//! units, no conversion) so it can be loaded back losslessly. The canvas is
//! not part of the file; importers supply it when rebuilding a snapshot.

use std::path::Path;

use chrono::Utc;
use panelkit_core::{
    ControlElement, Error, ExportError, LayoutCanvas, LayoutSettings, LayoutSnapshot, Result,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Scene file format version written on export
pub const LAYOUT_FILE_VERSION: u32 = 1;

#[derive(Serialize)]
struct LayoutJsonFile<'a> {
    version: u32,
    elements: &'a [ControlElement],
    settings: &'a LayoutSettings,
    metadata: ExportMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exported_at: Option<String>,
}

/// Accepted shape of an imported scene file. Unknown keys are ignored and
/// `version` may be any number.
#[derive(Deserialize)]
struct RawLayoutFile {
    #[serde(default)]
    #[allow(dead_code)]
    version: Option<f64>,
    elements: Vec<ControlElement>,
    settings: LayoutSettings,
    #[serde(default)]
    #[allow(dead_code)]
    metadata: Option<ExportMetadata>,
}

/// Elements and settings recovered from a scene file
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutJsonPayload {
    pub elements: Vec<ControlElement>,
    pub settings: LayoutSettings,
}

impl LayoutJsonPayload {
    /// Rebuild a snapshot for re-export on the given canvas
    pub fn into_snapshot(self, canvas: LayoutCanvas) -> LayoutSnapshot {
        LayoutSnapshot::new(canvas, self.elements, self.settings)
    }
}

/// Encode the snapshot as a pretty-printed scene file.
///
/// The snapshot is validated first so an export never produces a file the
/// importer would reject.
pub fn encode_json(snapshot: &LayoutSnapshot) -> Result<String> {
    snapshot.validate()?;

    let file = LayoutJsonFile {
        version: LAYOUT_FILE_VERSION,
        elements: &snapshot.elements,
        settings: &snapshot.settings,
        metadata: ExportMetadata {
            exported_at: Some(Utc::now().to_rfc3339()),
        },
    };

    serde_json::to_string_pretty(&file).map_err(|e| {
        Error::from(ExportError::Serialization {
            reason: e.to_string(),
        })
    })
}

/// Parse and validate a scene file. Any failure rejects the whole file.
pub fn parse_layout_json(content: &str) -> Result<LayoutJsonPayload> {
    let raw: RawLayoutFile = serde_json::from_str(content).map_err(|e| {
        warn!("Rejected layout file: {}", e);
        ValidationError::Malformed(e.to_string())
    })?;

    let payload = LayoutJsonPayload {
        elements: raw.elements,
        settings: raw.settings,
    };

    for (index, element) in payload.elements.iter().enumerate() {
        element
            .validate(&format!("elements[{}]", index))
            .inspect_err(|e| warn!("Rejected layout file: {}", e))?;
    }
    payload
        .settings
        .validate()
        .inspect_err(|e| warn!("Rejected layout file: {}", e))?;

    info!(elements = payload.elements.len(), "Imported layout");
    Ok(payload)
}

/// Read a scene file from disk and parse it
pub fn read_layout_json_file(path: impl AsRef<Path>) -> Result<LayoutJsonPayload> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_layout_json(&content)
}
