//! # PanelKit Export
//!
//! Turns a layout snapshot into manufacturing and interchange files.
//!
//! ## Pipeline
//!
//! ```text
//! LayoutSnapshot
//!   └── Geometry (per call)
//!         ├── Tracer: element -> rounded-rectangle polygon (mm)
//!         └── Bounds: union of polygons, canvas fallback
//!   └── Encoders
//!         ├── Scene JSON (round-trippable, scene units)
//!         ├── SVG  (native rects, mm, Y down)
//!         ├── DXF  (LWPOLYLINE, mm, Y up)
//!         └── PDF  (stroked segments, points, Y up)
//!   └── Dispatcher -> ExportPayload { filename, mime_type, bytes }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use panelkit_core::{ExportFormat, LayoutSnapshot};
//! use panelkit_export::{export_layout, ExportOptions};
//!
//! let payload = export_layout(
//!     ExportFormat::Dxf,
//!     &snapshot,
//!     &ExportOptions::with_filename("Main Panel"),
//! )
//! .await?;
//! assert_eq!(payload.filename, "main-panel.dxf");
//! ```

pub mod export;
pub mod formats;
pub mod geometry;

pub use export::{
    export_layout, resolve_base_name, sanitize_filename, ExportOptions, ExportPayload,
    DEFAULT_BASE_NAME,
};
pub use formats::{
    encode_dxf, encode_json, encode_pdf, encode_svg, layout_pdf_page, parse_layout_json,
    read_layout_json_file, write_pdf, LayoutJsonPayload, PdfPage,
};
pub use geometry::{
    compute_bounds, element_radius_mm, fallback_bounds, format_number, trace_polygon, Bounds,
    Point, TraceOptions,
};
