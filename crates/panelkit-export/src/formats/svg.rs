//! SVG encoder.
//!
//! Each element becomes a native `<rect>` with `rx`/`ry` corner radii and a
//! rotation transform about its center, so the drawing stays editable in
//! vector tools. Coordinates are millimeters with Y pointing down.

use panelkit_core::{to_millimeters, ControlElement, LayoutSnapshot, Units};
use tracing::debug;

use crate::geometry::{compute_bounds, element_radius_mm, format_number, Bounds, TraceOptions};

const STROKE_COLOR: &str = "#1f2937";
const STROKE_WIDTH_MM: &str = "0.35";

/// Encode the snapshot as an SVG document sized to the layout bounds
pub fn encode_svg(snapshot: &LayoutSnapshot) -> String {
    let units = snapshot.units();
    let bounds = compute_bounds(snapshot, TraceOptions::default());
    let width = format_number(bounds.width());
    let height = format_number(bounds.height());

    let rects: Vec<String> = snapshot
        .elements
        .iter()
        .map(|element| render_rect(element, units, &bounds))
        .collect();

    debug!(rects = rects.len(), %width, %height, "encoded SVG");

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    ));
    svg.push_str("  <title>Layout Export</title>\n");
    svg.push_str("  <g fill=\"none\" stroke-linejoin=\"round\" stroke-linecap=\"round\">\n");
    svg.push_str("    ");
    svg.push_str(&rects.join("\n    "));
    svg.push_str("\n  </g>\n</svg>");
    svg
}

fn render_rect(element: &ControlElement, units: Units, bounds: &Bounds) -> String {
    let width = to_millimeters(element.size.width, units);
    let height = to_millimeters(element.size.height, units);
    let x = to_millimeters(element.position.x, units) - bounds.min_x;
    let y = to_millimeters(element.position.y, units) - bounds.min_y;
    let cx = x + width / 2.0;
    let cy = y + height / 2.0;
    let radius = format_number(element_radius_mm(element, units));

    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{r}\" ry=\"{r}\" transform=\"rotate({} {} {})\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
        format_number(x),
        format_number(y),
        format_number(width),
        format_number(height),
        format_number(element.rotation),
        format_number(cx),
        format_number(cy),
        STROKE_COLOR,
        STROKE_WIDTH_MM,
        r = radius,
    )
}
