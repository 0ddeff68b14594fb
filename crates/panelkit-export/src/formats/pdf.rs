//! PDF encoder.
//!
//! Produces a single page sized to the layout bounds plus a 5% margin and
//! strokes every element outline as individual line segments. Geometry is
//! laid out on the calling task; building and serializing the document runs
//! on the blocking pool.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use panelkit_core::{ExportError, LayoutSnapshot, POINTS_PER_MM};
use tracing::debug;

use crate::geometry::{compute_bounds, round4, trace_polygon, Point, TraceOptions};

/// Margin on every side, as a fraction of the larger layout dimension
pub const MARGIN_RATIO: f64 = 0.05;
/// Stroke color as RGB components in `0..=1`
pub const STROKE_RGB: [f64; 3] = [0.13, 0.16, 0.22];
/// Stroke width in points
pub const STROKE_WIDTH_PT: f64 = 1.0;

const PDF_VERSION: &str = "1.7";

/// A page worth of line segments in PDF user space (points, Y up)
#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    pub width_pt: f64,
    pub height_pt: f64,
    pub segments: Vec<(Point, Point)>,
}

/// Lay out every element outline on a single page
pub fn layout_pdf_page(snapshot: &LayoutSnapshot) -> PdfPage {
    let units = snapshot.units();
    let options = TraceOptions::default();
    let bounds = compute_bounds(snapshot, options);

    let margin_mm = bounds.width().max(bounds.height()) * MARGIN_RATIO;
    let width_pt = (bounds.width() + margin_mm * 2.0) * POINTS_PER_MM;
    let height_pt = (bounds.height() + margin_mm * 2.0) * POINTS_PER_MM;
    let offset_pt = margin_mm * POINTS_PER_MM;

    let to_page = |p: &Point| {
        Point::new(
            (p.x - bounds.min_x) * POINTS_PER_MM + offset_pt,
            height_pt - ((p.y - bounds.min_y) * POINTS_PER_MM + offset_pt),
        )
    };

    let mut segments = Vec::new();
    for element in &snapshot.elements {
        let polygon = trace_polygon(element, units, options);
        if polygon.len() < 2 {
            debug!(id = %element.id, "skipping element without visible geometry");
            continue;
        }
        for (index, current) in polygon.iter().enumerate() {
            let next = &polygon[(index + 1) % polygon.len()];
            segments.push((to_page(current), to_page(next)));
        }
    }

    PdfPage {
        width_pt,
        height_pt,
        segments,
    }
}

/// Build and serialize a one-page document
pub fn write_pdf(page: &PdfPage) -> Result<Vec<u8>, ExportError> {
    let mut operations = vec![
        Operation::new(
            "RG",
            STROKE_RGB.iter().map(|c| real(*c)).collect::<Vec<Object>>(),
        ),
        Operation::new("w", vec![real(STROKE_WIDTH_PT)]),
    ];
    for (start, end) in &page.segments {
        operations.push(Operation::new("m", vec![real(start.x), real(start.y)]));
        operations.push(Operation::new("l", vec![real(end.x), real(end.y)]));
        operations.push(Operation::new("S", vec![]));
    }

    let content = Content { operations }.encode().map_err(pdf_error)?;

    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! {},
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            real(page.width_pt),
            real(page.height_pt),
        ],
    });
    doc.set_object(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        },
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(pdf_error)?;
    Ok(bytes)
}

/// Encode the snapshot as a PDF document
pub async fn encode_pdf(snapshot: &LayoutSnapshot) -> Result<Vec<u8>, ExportError> {
    let page = layout_pdf_page(snapshot);
    debug!(
        width_pt = page.width_pt,
        height_pt = page.height_pt,
        segments = page.segments.len(),
        "laid out PDF page"
    );

    tokio::task::spawn_blocking(move || write_pdf(&page))
        .await
        .map_err(pdf_error)?
}

/// Every number written to the document is rounded to 4 decimals
fn real(value: f64) -> Object {
    Object::Real(round4(value) as f32)
}

fn pdf_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf {
        reason: err.to_string(),
    }
}
