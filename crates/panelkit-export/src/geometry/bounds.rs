use panelkit_core::{to_millimeters, LayoutSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tracer::{trace_polygon, TraceOptions};

/// Axis-aligned extent of a layout in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// Canvas-sized bounds, anchored at the origin
pub fn fallback_bounds(snapshot: &LayoutSnapshot, options: TraceOptions) -> Bounds {
    let units = snapshot.units();
    let width_mm = to_millimeters(snapshot.canvas.width, units);
    let height_mm = to_millimeters(snapshot.canvas.height, units);

    if options.flip_y {
        Bounds::new(0.0, -height_mm, width_mm, 0.0)
    } else {
        Bounds::new(0.0, 0.0, width_mm, height_mm)
    }
}

/// Union of every traced element polygon.
///
/// An empty scene, or one whose silhouettes have no area, falls back to the
/// canvas box so every encoder still gets a usable page size.
pub fn compute_bounds(snapshot: &LayoutSnapshot, options: TraceOptions) -> Bounds {
    let units = snapshot.units();
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for element in &snapshot.elements {
        for point in trace_polygon(element, units, options) {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
    }

    let bounds = Bounds::new(min_x, min_y, max_x, max_y);
    let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
    if !finite || !bounds.has_area() {
        let fallback = fallback_bounds(snapshot, options);
        debug!(
            elements = snapshot.elements.len(),
            width = fallback.width(),
            height = fallback.height(),
            "layout has no drawable extent, using canvas bounds"
        );
        return fallback;
    }

    bounds
}
