//! Geometry shared by the export formats.
//!
//! Everything here is recomputed per export call from the snapshot; nothing
//! is cached on the elements.

mod bounds;
mod number;
mod tracer;

pub use bounds::{compute_bounds, fallback_bounds, Bounds};
pub use number::{format_number, round4};
pub use tracer::{element_radius_mm, trace_polygon, TraceOptions, DEDUP_EPSILON_MM};

use serde::{Deserialize, Serialize};

/// 2D point in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
