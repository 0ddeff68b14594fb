//! Export dispatcher.
//!
//! Picks the encoder for a format, names the output file and hands back an
//! in-memory payload. Writing the payload anywhere is up to the caller.

use std::sync::OnceLock;

use panelkit_core::{ExportFormat, LayoutSnapshot, Result};
use regex::Regex;
use tracing::info;

use crate::formats::{encode_dxf, encode_json, encode_pdf, encode_svg};

/// Base name used when no usable filename was requested
pub const DEFAULT_BASE_NAME: &str = "layout";

/// Caller-supplied export options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Requested base name, sanitized before use
    pub filename: Option<String>,
}

impl ExportOptions {
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }
}

/// Encoded export ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Reduce a user-supplied name to lowercase `[a-z0-9-_]` with single dashes
pub fn sanitize_filename(value: &str) -> String {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    static REPEATED_DASH: OnceLock<Regex> = OnceLock::new();
    static EDGE_DASH: OnceLock<Regex> = OnceLock::new();

    let disallowed =
        DISALLOWED.get_or_init(|| Regex::new(r"[^a-z0-9\-_]+").expect("invalid regex pattern"));
    let repeated_dash =
        REPEATED_DASH.get_or_init(|| Regex::new(r"-{2,}").expect("invalid regex pattern"));
    let edge_dash = EDGE_DASH.get_or_init(|| Regex::new(r"^-|-$").expect("invalid regex pattern"));

    let lowered = value.trim().to_lowercase();
    let replaced = disallowed.replace_all(&lowered, "-");
    let collapsed = repeated_dash.replace_all(&replaced, "-");
    edge_dash.replace_all(&collapsed, "").into_owned()
}

/// Base name for an export, falling back to [`DEFAULT_BASE_NAME`]
pub fn resolve_base_name(options: &ExportOptions) -> String {
    options
        .filename
        .as_deref()
        .map(sanitize_filename)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string())
}

/// Encode a snapshot in the requested format
pub async fn export_layout(
    format: ExportFormat,
    snapshot: &LayoutSnapshot,
    options: &ExportOptions,
) -> Result<ExportPayload> {
    let base_name = resolve_base_name(options);

    let bytes = match format {
        ExportFormat::Json => encode_json(snapshot)?.into_bytes(),
        ExportFormat::Svg => encode_svg(snapshot).into_bytes(),
        ExportFormat::Dxf => encode_dxf(snapshot).into_bytes(),
        ExportFormat::Pdf => encode_pdf(snapshot).await?,
    };

    let payload = ExportPayload {
        filename: format!("{}.{}", base_name, format.extension()),
        mime_type: format.mime_type(),
        bytes,
    };

    info!(
        format = %format,
        filename = %payload.filename,
        bytes = payload.bytes.len(),
        elements = snapshot.elements.len(),
        "Exported layout"
    );

    Ok(payload)
}
