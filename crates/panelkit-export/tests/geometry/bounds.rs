use panelkit_core::{
    ElementBuilder, LayoutCanvas, LayoutSettings, LayoutSnapshot, Units,
};
use panelkit_export::{compute_bounds, fallback_bounds, trace_polygon, Bounds, TraceOptions};
use proptest::prelude::*;

#[test]
fn test_empty_snapshot_fallback() {
    let snapshot = LayoutSnapshot::default();
    assert_eq!(
        compute_bounds(&snapshot, TraceOptions::default()),
        Bounds::new(0.0, 0.0, 600.0, 300.0)
    );
    assert_eq!(
        fallback_bounds(&snapshot, TraceOptions::default().flipped()),
        Bounds::new(0.0, -300.0, 600.0, 0.0)
    );
}

#[test]
fn test_flipped_bounds_mirror_plain() {
    let element = ElementBuilder::new()
        .kind("lever")
        .position(20.0, 35.0)
        .rotation(15.0)
        .build()
        .unwrap();
    let snapshot = LayoutSnapshot::new(
        LayoutCanvas::default(),
        vec![element],
        LayoutSettings::default(),
    );

    let plain = compute_bounds(&snapshot, TraceOptions::default());
    let flipped = compute_bounds(&snapshot, TraceOptions::default().flipped());
    assert_eq!(plain.min_x, flipped.min_x);
    assert_eq!(plain.max_x, flipped.max_x);
    assert_eq!(plain.min_y, -flipped.max_y);
    assert_eq!(plain.max_y, -flipped.min_y);
}

#[test]
fn test_bounds_in_inches_are_millimeters() {
    let element = ElementBuilder::new()
        .kind("custom")
        .size(2.0, 1.0)
        .position(1.0, 1.0)
        .build()
        .unwrap();
    let settings = LayoutSettings {
        units: Units::Inches,
        ..LayoutSettings::default()
    };
    let snapshot = LayoutSnapshot::new(LayoutCanvas::default(), vec![element], settings);

    let bounds = compute_bounds(&snapshot, TraceOptions::default());
    assert!((bounds.min_x - 25.4).abs() < 1e-9);
    assert!((bounds.width() - 50.8).abs() < 1e-9);
    assert!((bounds.height() - 25.4).abs() < 1e-9);
}

fn element_strategy() -> impl Strategy<Value = (f64, f64, f64, f64, f64, f64)> {
    (
        1.0f64..80.0,
        1.0f64..80.0,
        -100.0f64..400.0,
        -100.0f64..200.0,
        -180.0f64..180.0,
        0.0f64..100.0,
    )
}

proptest! {
    #[test]
    fn prop_bounds_contain_every_point(
        specs in prop::collection::vec(element_strategy(), 1..8),
        flip in any::<bool>(),
    ) {
        let elements = specs
            .iter()
            .map(|&(w, h, x, y, rotation, radius)| {
                ElementBuilder::new()
                    .kind("custom")
                    .size(w, h)
                    .position(x, y)
                    .rotation(rotation)
                    .radius(radius)
                    .build()
                    .unwrap()
            })
            .collect();
        let snapshot = LayoutSnapshot::new(
            LayoutCanvas::default(),
            elements,
            LayoutSettings::default(),
        );
        let options = if flip {
            TraceOptions::default().flipped()
        } else {
            TraceOptions::default()
        };

        let bounds = compute_bounds(&snapshot, options);
        prop_assert!(bounds.has_area());
        for element in &snapshot.elements {
            for point in trace_polygon(element, snapshot.units(), options) {
                prop_assert!(point.x >= bounds.min_x && point.x <= bounds.max_x);
                prop_assert!(point.y >= bounds.min_y && point.y <= bounds.max_y);
            }
        }
    }
}
