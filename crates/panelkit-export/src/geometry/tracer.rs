//! Rounded-rectangle tracing.
//!
//! Turns one control element into a closed polygon in millimeters. The
//! polygon is walked clockwise (in screen space) starting on the top edge,
//! rotated about the element center, and optionally flipped for Y-up
//! formats. The closing edge back to the first point is implied.

use std::f64::consts::{FRAC_PI_2, PI};

use panelkit_core::{to_millimeters, ControlElement, Units};

use super::Point;

/// Consecutive points closer than this (mm) are merged.
pub const DEDUP_EPSILON_MM: f64 = 1e-6;

/// Per-format tracing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceOptions {
    /// Arc steps per rounded corner (at least 1 is used)
    pub segments_per_corner: usize,
    /// Negate Y for formats whose Y axis points up
    pub flip_y: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            segments_per_corner: 6,
            flip_y: false,
        }
    }
}

impl TraceOptions {
    pub fn flipped(mut self) -> Self {
        self.flip_y = true;
        self
    }

    pub fn with_segments(mut self, segments_per_corner: usize) -> Self {
        self.segments_per_corner = segments_per_corner;
        self
    }
}

/// Corner radius of an element in millimeters.
///
/// `radius` metadata is a percentage of half the smaller side, so the result
/// never exceeds either half-extent.
pub fn element_radius_mm(element: &ControlElement, units: Units) -> f64 {
    let width_mm = to_millimeters(element.size.width, units);
    let height_mm = to_millimeters(element.size.height, units);
    let percentage = element.metadata.radius_percent();
    (percentage / 100.0) * width_mm.min(height_mm) / 2.0
}

/// Trace the silhouette of an element as a polygon in millimeters
pub fn trace_polygon(element: &ControlElement, units: Units, options: TraceOptions) -> Vec<Point> {
    let width_mm = to_millimeters(element.size.width, units);
    let height_mm = to_millimeters(element.size.height, units);
    let x_mm = to_millimeters(element.position.x, units);
    let y_mm = to_millimeters(element.position.y, units);
    let cx = x_mm + width_mm / 2.0;
    let cy = y_mm + height_mm / 2.0;

    let half_w = width_mm / 2.0;
    let half_h = height_mm / 2.0;
    let radius = element_radius_mm(element, units).min(half_w).min(half_h);

    let local = if radius > 0.0 {
        rounded_outline(half_w, half_h, radius, options.segments_per_corner.max(1))
    } else {
        vec![
            (-half_w, -half_h),
            (half_w, -half_h),
            (half_w, half_h),
            (-half_w, half_h),
        ]
    };

    let angle = element.rotation.to_radians();
    let (sin, cos) = angle.sin_cos();

    let placed: Vec<Point> = local
        .into_iter()
        .map(|(lx, ly)| {
            let x = cx + lx * cos - ly * sin;
            let y = cy + lx * sin + ly * cos;
            Point::new(x, if options.flip_y { -y } else { y })
        })
        .collect();

    // Each point is compared with its raw predecessor, not the last kept one
    let mut polygon = Vec::with_capacity(placed.len());
    for (index, point) in placed.iter().enumerate() {
        if index == 0 || placed[index - 1].distance_to(point) > DEDUP_EPSILON_MM {
            polygon.push(*point);
        }
    }

    polygon
}

/// Local-frame outline of a rounded rectangle centred on the origin
fn rounded_outline(half_w: f64, half_h: f64, r: f64, segments: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(8 + 4 * (segments + 1));

    let arc = |points: &mut Vec<(f64, f64)>, center_x: f64, center_y: f64, start: f64| {
        for i in 0..=segments {
            let t = start + FRAC_PI_2 * (i as f64) / (segments as f64);
            points.push((center_x + r * t.cos(), center_y + r * t.sin()));
        }
    };

    // Top edge, then top-right corner
    points.push((-half_w + r, -half_h));
    points.push((half_w - r, -half_h));
    arc(&mut points, half_w - r, -half_h + r, -FRAC_PI_2);

    // Right edge, then bottom-right corner
    points.push((half_w, -half_h + r));
    points.push((half_w, half_h - r));
    arc(&mut points, half_w - r, half_h - r, 0.0);

    // Bottom edge, then bottom-left corner
    points.push((half_w - r, half_h));
    points.push((-half_w + r, half_h));
    arc(&mut points, -half_w + r, half_h - r, FRAC_PI_2);

    // Left edge, then top-left corner
    points.push((-half_w, half_h - r));
    points.push((-half_w, -half_h + r));
    arc(&mut points, -half_w + r, -half_h + r, PI);

    points
}
