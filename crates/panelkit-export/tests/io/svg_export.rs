use panelkit_core::{ElementBuilder, Units};
use panelkit_export::encode_svg;

use crate::fixtures::{mixed_panel, round_button, snapshot};

fn rects(svg: &str) -> Vec<&str> {
    svg.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<rect"))
        .collect()
}

#[test]
fn test_round_button_rect() {
    let svg = encode_svg(&snapshot(vec![round_button()]));

    assert!(svg.contains("width=\"30mm\" height=\"30mm\" viewBox=\"0 0 30 30\""));
    assert!(svg.contains("<title>Layout Export</title>"));
    assert_eq!(
        rects(&svg),
        vec![
            "<rect x=\"0\" y=\"0\" width=\"30\" height=\"30\" rx=\"15\" ry=\"15\" transform=\"rotate(0 15 15)\" fill=\"none\" stroke=\"#1f2937\" stroke-width=\"0.35\" />"
        ]
    );
}

#[test]
fn test_one_rect_per_element() {
    let svg = encode_svg(&mixed_panel());
    assert_eq!(rects(&svg).len(), 3);
}

#[test]
fn test_zero_size_element_still_drawn() {
    let dot = ElementBuilder::new()
        .kind("custom")
        .size(0.0, 0.0)
        .position(5.0, 5.0)
        .build()
        .unwrap();
    let svg = encode_svg(&snapshot(vec![round_button(), dot]));
    assert_eq!(rects(&svg).len(), 2);
}

#[test]
fn test_inches_are_written_in_millimeters() {
    let element = ElementBuilder::new()
        .kind("custom")
        .size(1.0, 2.0)
        .position(1.0, 1.0)
        .build()
        .unwrap();
    let mut scene = snapshot(vec![element]);
    scene.settings.units = Units::Inches;

    let svg = encode_svg(&scene);
    assert!(svg.contains("width=\"25.4mm\" height=\"50.8mm\""));
    assert!(rects(&svg)[0].contains("x=\"0\" y=\"0\" width=\"25.4\" height=\"50.8\""));
}
