//! Error handling for PanelKit
//!
//! Provides error types for the export pipeline:
//! - Validation errors (scene import and export-time schema checks)
//! - Export errors (format selection and document encoding)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised when a scene does not conform to the element/settings schema.
/// A validation failure always rejects the whole scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The input is not structurally a scene (bad JSON, missing field, wrong type)
    #[error("Malformed layout: {0}")]
    Malformed(String),

    /// A field is present but its value is out of range
    #[error("Invalid value at '{path}': {reason}")]
    InvalidField {
        /// Dotted path to the offending field, e.g. `elements[2].size.width`.
        path: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// Create an invalid-field error
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Export error type
///
/// Represents errors raised while selecting or running an encoder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The requested format tag is not one of json, svg, dxf, pdf
    #[error("Unsupported export format: {format}")]
    UnsupportedFormat {
        /// The format tag that was requested.
        format: String,
    },

    /// PDF document construction or serialization failed
    #[error("PDF encoding failed: {reason}")]
    Pdf {
        /// The reason reported by the PDF backend.
        reason: String,
    },

    /// A payload could not be serialized
    #[error("Serialization failed: {reason}")]
    Serialization {
        /// The reason the serialization failed.
        reason: String,
    },
}

/// Main error type for PanelKit
///
/// A unified error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is an export error
    pub fn is_export_error(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
