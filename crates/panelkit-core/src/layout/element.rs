use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Metadata key holding the corner radius percentage.
pub const RADIUS_KEY: &str = "radius";

/// Width and height of an element in scene units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of an element (or an anchor offset) in scene units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementPosition {
    pub x: f64,
    pub y: f64,
}

impl ElementPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Anchor linking an element to another one.
///
/// Resolved by the editor before a snapshot is taken; export only carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeAnchor {
    pub target_id: String,
    pub offset: ElementPosition,
    pub inherit_rotation: bool,
}

/// Open key/value metadata attached to an element.
///
/// Only `radius` has a meaning to geometry; every other key is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corner radius as a percentage of the half-minor dimension, clamped
    /// into `[0, 100]`. Missing or non-numeric values read as 0.
    pub fn radius_percent(&self) -> f64 {
        self.0
            .get(RADIUS_KEY)
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite())
            .map(clamp_percentage)
            .unwrap_or(0.0)
    }

    /// Store a corner radius percentage (clamped). Whole percentages are
    /// stored as JSON integers.
    pub fn set_radius_percent(&mut self, percent: f64) {
        let percent = clamp_percentage(percent);
        let value = if percent.fract() == 0.0 {
            Value::from(percent as u64)
        } else {
            Value::from(percent)
        };
        self.0.insert(RADIUS_KEY.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Clamp a percentage into `[0, 100]`
pub fn clamp_percentage(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// A single control placed on the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlElement {
    pub id: String,
    pub name: String,
    pub mapping: String,
    /// Element type ("button", "lever", "custom", ...). Opaque to export.
    #[serde(rename = "type")]
    pub kind: String,
    pub variant: String,
    pub size: ElementSize,
    pub position: ElementPosition,
    /// Degrees, clockwise in screen space, about the element center
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<RelativeAnchor>,
    pub metadata: Metadata,
}

impl ControlElement {
    /// Check the element against the layout schema.
    ///
    /// `path` prefixes field names in the error, e.g. `elements[3]`.
    pub fn validate(&self, path: &str) -> Result<(), ValidationError> {
        require_non_negative(&format!("{}.size.width", path), self.size.width)?;
        require_non_negative(&format!("{}.size.height", path), self.size.height)?;
        require_finite(&format!("{}.position.x", path), self.position.x)?;
        require_finite(&format!("{}.position.y", path), self.position.y)?;
        require_finite(&format!("{}.rotation", path), self.rotation)?;

        if let Some(anchor) = &self.relative_to {
            require_finite(&format!("{}.relativeTo.offset.x", path), anchor.offset.x)?;
            require_finite(&format!("{}.relativeTo.offset.y", path), anchor.offset.y)?;
        }

        Ok(())
    }
}

pub(crate) fn require_finite(path: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::invalid(path, "must be a finite number"))
    }
}

pub(crate) fn require_non_negative(path: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(path, value)?;
    if value < 0.0 {
        return Err(ValidationError::invalid(path, "must be >= 0"));
    }
    Ok(())
}

pub(crate) fn require_positive(path: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(path, value)?;
    if value <= 0.0 {
        return Err(ValidationError::invalid(path, "must be > 0"));
    }
    Ok(())
}
