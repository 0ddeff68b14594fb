use lopdf::content::Content;
use lopdf::{Document, Object};
use panelkit_core::{ElementBuilder, LayoutSnapshot, POINTS_PER_MM};
use panelkit_export::{encode_pdf, layout_pdf_page, trace_polygon, write_pdf, TraceOptions};

use crate::fixtures::{mixed_panel, round_button, snapshot};

struct ParsedPage {
    media_box: Vec<f64>,
    operators: Vec<String>,
    operands: Vec<Object>,
}

fn parse(bytes: &[u8]) -> ParsedPage {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    let page_id = *pages.values().next().unwrap();

    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let media_box = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| match v {
            Object::Integer(i) => *i as f64,
            Object::Real(r) => *r as f64,
            other => panic!("unexpected MediaBox entry {:?}", other),
        })
        .collect();

    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    let mut operators = Vec::new();
    let mut operands = Vec::new();
    for op in content.operations {
        operators.push(op.operator);
        operands.extend(op.operands);
    }

    ParsedPage {
        media_box,
        operators,
        operands,
    }
}

fn fraction_digits(value: f32) -> usize {
    let text = value.to_string();
    text.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

fn count(operators: &[String], name: &str) -> usize {
    operators.iter().filter(|op| op.as_str() == name).count()
}

#[tokio::test]
async fn test_round_button_page_size() {
    let bytes = encode_pdf(&snapshot(vec![round_button()])).await.unwrap();
    let page = parse(&bytes);

    // 30 mm plus a 1.5 mm margin on each side
    let expected = 33.0 * POINTS_PER_MM;
    assert_eq!(page.media_box.len(), 4);
    assert!((page.media_box[2] - expected).abs() < 1e-3);
    assert!((page.media_box[3] - expected).abs() < 1e-3);

    assert_eq!(count(&page.operators, "RG"), 1);
    assert_eq!(count(&page.operators, "w"), 1);
    assert_eq!(count(&page.operators, "S"), 25);
}

#[tokio::test]
async fn test_one_stroke_per_polygon_edge() {
    let scene = mixed_panel();
    let edges: usize = scene
        .elements
        .iter()
        .map(|e| trace_polygon(e, scene.units(), TraceOptions::default()).len())
        .sum();

    let page = parse(&encode_pdf(&scene).await.unwrap());
    assert_eq!(count(&page.operators, "m"), edges);
    assert_eq!(count(&page.operators, "l"), edges);
    assert_eq!(count(&page.operators, "S"), edges);
}

#[tokio::test]
async fn test_empty_snapshot_page() {
    let page = parse(&encode_pdf(&LayoutSnapshot::default()).await.unwrap());

    assert!((page.media_box[2] - 660.0 * POINTS_PER_MM).abs() < 1e-2);
    assert!((page.media_box[3] - 360.0 * POINTS_PER_MM).abs() < 1e-2);
    assert_eq!(count(&page.operators, "S"), 0);
}

#[test]
fn test_numbers_rounded_to_four_decimals() {
    let element = ElementBuilder::new()
        .kind("button")
        .size(30.0, 30.0)
        .position(0.123456, 0.0)
        .rotation(33.3)
        .build()
        .unwrap();
    let bytes = write_pdf(&layout_pdf_page(&snapshot(vec![element]))).unwrap();
    let page = parse(&bytes);

    assert!(!page.operands.is_empty());
    for operand in &page.operands {
        match operand {
            Object::Real(value) => assert!(
                fraction_digits(*value) <= 4,
                "operand {} has more than 4 decimals",
                value
            ),
            Object::Integer(_) => {}
            other => panic!("unexpected operand {:?}", other),
        }
    }
    for value in &page.media_box {
        assert!(fraction_digits(*value as f32) <= 4, "MediaBox entry {}", value);
    }
}
