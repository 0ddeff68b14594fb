//! Layout data model.
//!
//! A layout is a flat list of control elements placed on a canvas, plus the
//! editor settings that decide which unit system those numbers are in. The
//! export pipeline only ever reads a [`LayoutSnapshot`]; it never holds on to
//! one between calls.

mod element;
mod factory;
mod format;
mod snapshot;

pub use element::{ControlElement, ElementPosition, ElementSize, Metadata, RelativeAnchor};
pub use factory::{
    build_element_name, create_element, default_radius_for_type, default_size_for_type,
    ElementBuilder,
};
pub use format::ExportFormat;
pub use snapshot::{LayoutCanvas, LayoutSettings, LayoutSnapshot};
