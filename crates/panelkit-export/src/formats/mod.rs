//! Format encoders.
//!
//! JSON, SVG and DXF are plain synchronous functions over a snapshot. PDF is
//! async because document serialization is moved off the calling task.

pub mod dxf;
pub mod json;
pub mod pdf;
pub mod svg;

pub use dxf::{dxf_trace_options, encode_dxf};
pub use json::{
    encode_json, parse_layout_json, read_layout_json_file, LayoutJsonPayload, LAYOUT_FILE_VERSION,
};
pub use pdf::{encode_pdf, layout_pdf_page, write_pdf, PdfPage};
pub use svg::encode_svg;
