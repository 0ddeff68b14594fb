use panelkit_core::{LayoutCanvas, Units};
use panelkit_export::{encode_json, parse_layout_json, read_layout_json_file};
use serde_json::json;
use tempfile::TempDir;

use crate::fixtures::mixed_panel;

#[test]
fn test_round_trip_preserves_elements_and_settings() {
    let mut snapshot = mixed_panel();
    snapshot.elements[1]
        .metadata
        .insert("label", json!({"text": "THR", "size": 2.5}));
    snapshot.elements[2].rotation = 12.345_678_9;

    let content = encode_json(&snapshot).unwrap();
    let payload = parse_layout_json(&content).unwrap();

    assert_eq!(payload.elements, snapshot.elements);
    assert_eq!(payload.settings, snapshot.settings);
}

#[test]
fn test_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("panel.json");

    let mut snapshot = mixed_panel();
    snapshot.settings.units = Units::Inches;
    std::fs::write(&path, encode_json(&snapshot).unwrap()).unwrap();

    let payload = read_layout_json_file(&path).unwrap();
    let restored = payload.into_snapshot(LayoutCanvas::default());
    assert_eq!(restored, snapshot);
}

#[test]
fn test_read_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_layout_json_file(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(!err.is_validation_error());
}

#[test]
fn test_one_bad_element_rejects_whole_file() {
    let snapshot = mixed_panel();
    let content = encode_json(&snapshot).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&content).unwrap();
    value["elements"][2]["size"]["width"] = json!(-4.0);

    let err = parse_layout_json(&value.to_string()).unwrap_err();
    assert!(err.is_validation_error());
    assert!(err.to_string().contains("elements[2].size.width"));
}

#[test]
fn test_wrong_field_type_is_rejected() {
    let content = json!({
        "version": 1,
        "elements": [{
            "id": "a", "name": "A", "mapping": "", "type": "button", "variant": "standard",
            "size": {"width": "wide", "height": 10},
            "position": {"x": 0, "y": 0},
            "rotation": 0,
            "metadata": {}
        }],
        "settings": {"units": "mm", "snapToGrid": true, "gridSize": 10, "showMeasurements": true}
    });
    let err = parse_layout_json(&content.to_string()).unwrap_err();
    assert!(err.is_validation_error());
}

#[test]
fn test_unknown_units_rejected() {
    let content = json!({
        "elements": [],
        "settings": {"units": "cm", "snapToGrid": true, "gridSize": 10, "showMeasurements": true}
    });
    assert!(parse_layout_json(&content.to_string()).is_err());
}
