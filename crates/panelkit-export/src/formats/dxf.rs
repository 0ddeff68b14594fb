//! DXF encoder.
//!
//! Writes an AutoCAD 2004 (`AC1018`) drawing with one closed `LWPOLYLINE`
//! per element on layer `0`. DXF is Y-up, so polygons are traced flipped and
//! shifted so the layout starts at the origin.

use panelkit_core::LayoutSnapshot;
use tracing::debug;

use crate::geometry::{compute_bounds, format_number, trace_polygon, TraceOptions};

const AUTOCAD_VERSION: &str = "AC1018";
const LAYER: &str = "0";
const CLOSED_FLAG: &str = "1";

/// Tracing parameters used for DXF polylines
pub fn dxf_trace_options() -> TraceOptions {
    TraceOptions::default().with_segments(6).flipped()
}

/// Encode the snapshot as newline-separated DXF group code/value pairs
pub fn encode_dxf(snapshot: &LayoutSnapshot) -> String {
    let units = snapshot.units();
    let options = dxf_trace_options();
    let bounds = compute_bounds(snapshot, options);

    let mut lines: Vec<String> = Vec::new();
    let mut push = |code: &str, value: &str| {
        lines.push(code.to_string());
        lines.push(value.to_string());
    };

    push("0", "SECTION");
    push("2", "HEADER");
    push("9", "$ACADVER");
    push("1", AUTOCAD_VERSION);
    push("0", "ENDSEC");
    push("0", "SECTION");
    push("2", "ENTITIES");

    let mut entities = 0usize;
    if bounds.has_area() {
        for element in &snapshot.elements {
            let polygon = trace_polygon(element, units, options);
            if polygon.len() < 2 {
                debug!(id = %element.id, "skipping element without visible geometry");
                continue;
            }

            push("0", "LWPOLYLINE");
            push("8", LAYER);
            push("90", &polygon.len().to_string());
            push("70", CLOSED_FLAG);
            for point in &polygon {
                push("10", &format_number(point.x - bounds.min_x));
                push("20", &format_number(point.y - bounds.min_y));
            }
            entities += 1;
        }
    }

    push("0", "ENDSEC");
    push("0", "EOF");

    debug!(entities, "encoded DXF");
    lines.join("\n")
}
