//! Unit conversion utilities
//!
//! Handles conversion between the scene's unit system (millimeters or
//! inches) and millimeters, plus the point and pixel scales used by the
//! output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// PDF points per millimeter (72 points per inch).
pub const POINTS_PER_MM: f64 = 72.0 / MM_PER_INCH;

/// CSS pixels per inch.
const PIXELS_PER_INCH: f64 = 96.0;

/// Unit system a layout is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    /// Millimeters
    #[serde(rename = "mm")]
    Millimeters,
    /// Inches
    #[serde(rename = "in")]
    Inches,
}

impl Default for Units {
    fn default() -> Self {
        Self::Millimeters
    }
}

impl Units {
    /// Short label used in files and on the command line ("mm" or "in")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "metric" => Ok(Self::Millimeters),
            "in" | "inch" | "imperial" => Ok(Self::Inches),
            _ => Err(format!("Unknown units: {}", s)),
        }
    }
}

/// Convert a scene value to millimeters
pub fn to_millimeters(value: f64, units: Units) -> f64 {
    match units {
        Units::Millimeters => value,
        Units::Inches => value * MM_PER_INCH,
    }
}

/// Convert millimeters back to scene units
pub fn from_millimeters(value_mm: f64, units: Units) -> f64 {
    match units {
        Units::Millimeters => value_mm,
        Units::Inches => value_mm / MM_PER_INCH,
    }
}

/// Screen pixels per scene unit (96 px/in, ~3.7795 px/mm)
pub fn units_to_pixels(units: Units) -> f64 {
    match units {
        Units::Millimeters => PIXELS_PER_INCH / MM_PER_INCH,
        Units::Inches => PIXELS_PER_INCH,
    }
}
