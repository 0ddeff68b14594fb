//! Element factory with per-type defaults.

use uuid::Uuid;

use super::element::{
    clamp_percentage, ControlElement, ElementPosition, ElementSize, Metadata, RelativeAnchor,
};
use crate::error::ValidationError;

const DEFAULT_TYPE: &str = "button";
const DEFAULT_NAME: &str = "New Element";
const DEFAULT_VARIANT: &str = "standard";

/// Default size for an element type, in scene units
pub fn default_size_for_type(kind: &str) -> ElementSize {
    match kind {
        "lever" => ElementSize::new(30.0, 80.0),
        "custom" => ElementSize::new(30.0, 30.0),
        _ => ElementSize::new(32.0, 32.0),
    }
}

/// Default corner radius percentage for an element type
pub fn default_radius_for_type(kind: &str) -> f64 {
    match kind {
        "button" => 100.0,
        "lever" => 12.0,
        _ => 0.0,
    }
}

/// Display name for the n-th element of a type, e.g. "Lever 2"
pub fn build_element_name(kind: &str, occurrences: usize) -> String {
    let mut chars = kind.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} {}", capitalized, occurrences)
}

/// Builder for new control elements.
///
/// Every field left unset falls back to the defaults of the element type.
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    kind: Option<String>,
    name: Option<String>,
    mapping: Option<String>,
    variant: Option<String>,
    size: Option<ElementSize>,
    position: Option<ElementPosition>,
    rotation: Option<f64>,
    relative_to: Option<RelativeAnchor>,
    metadata: Option<Metadata>,
}

impl ElementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mapping(mut self, mapping: impl Into<String>) -> Self {
        self.mapping = Some(mapping.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(ElementSize::new(width, height));
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(ElementPosition::new(x, y));
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn relative_to(mut self, anchor: RelativeAnchor) -> Self {
        self.relative_to = Some(anchor);
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the corner radius percentage directly
    pub fn radius(mut self, percent: f64) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .set_radius_percent(percent);
        self
    }

    /// Create the element with a fresh id and validate it
    pub fn build(self) -> Result<ControlElement, ValidationError> {
        let kind = self.kind.unwrap_or_else(|| DEFAULT_TYPE.to_string());
        let size = self.size.unwrap_or_else(|| default_size_for_type(&kind));

        let mut metadata = self.metadata.unwrap_or_default();
        let radius = metadata
            .get("radius")
            .and_then(|value| value.as_f64())
            .map(clamp_percentage)
            .unwrap_or_else(|| default_radius_for_type(&kind));
        metadata.set_radius_percent(radius);

        let element = ControlElement {
            id: Uuid::new_v4().to_string(),
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            mapping: self.mapping.unwrap_or_default(),
            kind,
            variant: self.variant.unwrap_or_else(|| DEFAULT_VARIANT.to_string()),
            size,
            position: self.position.unwrap_or_default(),
            rotation: self.rotation.unwrap_or(0.0),
            relative_to: self.relative_to,
            metadata,
        };

        element.validate("element")?;
        tracing::debug!("Created {} element {}", element.kind, element.id);
        Ok(element)
    }
}

/// Create an element of the given type with all defaults applied
pub fn create_element(kind: &str) -> Result<ControlElement, ValidationError> {
    ElementBuilder::new().kind(kind).build()
}
