//! # PanelKit Core
//!
//! Core types and utilities for PanelKit.
//! Provides the layout data model (control elements, canvas, settings),
//! unit conversion, the element factory, and the error taxonomy shared by
//! every export format.

pub mod error;
pub mod layout;
pub mod units;

pub use error::{Error, ExportError, Result, ValidationError};

pub use layout::{
    build_element_name, create_element, default_radius_for_type, default_size_for_type,
    ControlElement, ElementBuilder, ElementPosition, ElementSize, ExportFormat, LayoutCanvas,
    LayoutSettings, LayoutSnapshot, Metadata, RelativeAnchor,
};

pub use units::{
    from_millimeters, to_millimeters, units_to_pixels, Units, MM_PER_INCH, POINTS_PER_MM,
};
