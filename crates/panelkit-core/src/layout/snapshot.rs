use serde::{Deserialize, Serialize};

use super::element::{require_positive, ControlElement};
use crate::error::ValidationError;
use crate::units::Units;

/// Drawing surface the layout was authored on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutCanvas {
    pub width: f64,
    pub height: f64,
    pub grid_size: f64,
    pub units: Units,
}

impl Default for LayoutCanvas {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            grid_size: 10.0,
            units: Units::Millimeters,
        }
    }
}

/// Editor settings saved alongside the elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    /// Unit system every element size/position is expressed in
    pub units: Units,
    pub snap_to_grid: bool,
    pub grid_size: f64,
    pub show_measurements: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            units: Units::Millimeters,
            snap_to_grid: true,
            grid_size: 10.0,
            show_measurements: true,
        }
    }
}

impl LayoutSettings {
    /// Check the settings against the layout schema
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("settings.gridSize", self.grid_size)
    }
}

/// Read-only view of a layout handed to the export pipeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub canvas: LayoutCanvas,
    pub elements: Vec<ControlElement>,
    pub settings: LayoutSettings,
}

impl LayoutSnapshot {
    pub fn new(canvas: LayoutCanvas, elements: Vec<ControlElement>, settings: LayoutSettings) -> Self {
        Self {
            canvas,
            elements,
            settings,
        }
    }

    /// Units used to convert every scene value of this snapshot
    pub fn units(&self) -> Units {
        self.settings.units
    }

    /// Validate every element and the settings.
    ///
    /// The canvas is deliberately not checked: an empty or zero-sized
    /// canvas is handled by the fallback bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, element) in self.elements.iter().enumerate() {
            element.validate(&format!("elements[{}]", index))?;
        }
        self.settings.validate()
    }
}
