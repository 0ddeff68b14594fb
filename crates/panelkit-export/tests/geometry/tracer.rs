use std::f64::consts::PI;

use panelkit_core::{ElementBuilder, Units};
use panelkit_export::{trace_polygon, Point, TraceOptions};
use proptest::prelude::*;

#[test]
fn test_square_corners_without_radius() {
    let element = ElementBuilder::new()
        .kind("custom")
        .size(30.0, 20.0)
        .build()
        .unwrap();
    let polygon = trace_polygon(&element, Units::Millimeters, TraceOptions::default());
    assert_eq!(
        polygon,
        vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 20.0),
            Point::new(0.0, 20.0),
        ]
    );
}

#[test]
fn test_no_consecutive_duplicates() {
    let element = ElementBuilder::new()
        .kind("button")
        .size(30.0, 30.0)
        .radius(100.0)
        .build()
        .unwrap();
    let polygon = trace_polygon(&element, Units::Millimeters, TraceOptions::default());
    for pair in polygon.windows(2) {
        assert!(pair[0].distance_to(&pair[1]) > 1e-6);
    }
}

proptest! {
    #[test]
    fn prop_full_radius_stays_near_circle(
        size in 1.0f64..200.0,
        segments in 1usize..16,
    ) {
        let element = ElementBuilder::new()
            .kind("button")
            .size(size, size)
            .radius(100.0)
            .build()
            .unwrap();
        let options = TraceOptions::default().with_segments(segments);
        let polygon = trace_polygon(&element, Units::Millimeters, options);

        let r = size / 2.0;
        let tolerance = r * (1.0 - (PI / (4.0 * segments as f64)).cos()) + 1e-9;
        let center = Point::new(r, r);
        for point in &polygon {
            // Vertices sit on the arc; chords never cut deeper than the sagitta
            let d = point.distance_to(&center);
            prop_assert!((d - r).abs() <= tolerance, "d={} r={}", d, r);
        }
    }

    #[test]
    fn prop_full_turn_reproduces_unrotated(
        width in 1.0f64..100.0,
        height in 1.0f64..100.0,
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        radius in 0.0f64..100.0,
    ) {
        let build = |rotation: f64| {
            ElementBuilder::new()
                .kind("custom")
                .size(width, height)
                .position(x, y)
                .rotation(rotation)
                .radius(radius)
                .build()
                .unwrap()
        };
        let plain = trace_polygon(&build(0.0), Units::Millimeters, TraceOptions::default());
        let turned = trace_polygon(&build(360.0), Units::Millimeters, TraceOptions::default());

        prop_assert_eq!(plain.len(), turned.len());
        for (a, b) in plain.iter().zip(&turned) {
            prop_assert!(a.distance_to(b) < 1e-9);
        }
    }

    #[test]
    fn prop_rotation_preserves_distance_to_center(
        width in 1.0f64..100.0,
        height in 1.0f64..100.0,
        rotation in -720.0f64..720.0,
    ) {
        let element = ElementBuilder::new()
            .kind("lever")
            .size(width, height)
            .position(10.0, 10.0)
            .rotation(rotation)
            .build()
            .unwrap();
        let polygon = trace_polygon(&element, Units::Millimeters, TraceOptions::default());
        let center = Point::new(10.0 + width / 2.0, 10.0 + height / 2.0);
        let half_diagonal = (width * width + height * height).sqrt() / 2.0;
        for point in &polygon {
            prop_assert!(point.distance_to(&center) <= half_diagonal + 1e-9);
        }
    }
}
