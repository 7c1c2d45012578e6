//! Response formatting tests
//!
//! Exercises the formatters against small datasets loaded the same way the
//! server loads them.

use std::io::Write;

use hop_common::format::{format_interference, format_physiology, format_radar};
use hop_common::index::{RecordIndex, ResultKind};
use hop_common::{CanonicalKey, Error};
use tempfile::NamedTempFile;

fn load_index(kind: ResultKind, lines: &[&str]) -> RecordIndex {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    for line in lines {
        writeln!(file, "{line}").expect("Should write line");
    }
    RecordIndex::load(kind, file.path()).expect("Should load dataset")
}

fn empty_interference_index() -> RecordIndex {
    load_index(
        ResultKind::Interference,
        &[r#"{"inputs": ["unrelated"], "score": 1.0}"#],
    )
}

// =============================================================================
// Interference formatting
// =============================================================================

#[test]
fn empty_key_formats_to_the_zero_default() {
    let index = empty_interference_index();
    let response = format_interference(&index, &CanonicalKey::default()).unwrap();

    assert!(response.objectives.is_empty());
    assert_eq!(response.score, 0.0);
    assert_eq!(response.score_base, 0.0);
    assert!(response.breakdown.is_empty());
    assert!(response.redundancy_flags.is_empty());
}

#[test]
fn formats_the_worked_example() {
    let index = load_index(
        ResultKind::Interference,
        &[concat!(
            r#"{"inputs":["endurance","strength"],"score":0.42,"#,
            r#""breakdown":[{"axis":"endurance","label":"Endurance","#,
            r#""contribution":0.3,"interference":0.1}]}"#
        )],
    );

    let key = CanonicalKey::new(["strength", "endurance"]);
    let response = format_interference(&index, &key).unwrap();

    assert_eq!(response.objectives, ["endurance", "strength"]);
    assert_eq!(response.score, 0.42);
    assert_eq!(response.score_base, 0.0);
    assert_eq!(response.breakdown.len(), 1);
    let entry = &response.breakdown[0];
    assert_eq!(entry.axis.as_deref(), Some("endurance"));
    assert_eq!(entry.label.as_deref(), Some("Endurance"));
    assert_eq!(entry.contribution, Some(0.3));
    assert_eq!(entry.interference, Some(0.1));
    assert!(response.redundancy_flags.is_empty());
}

#[test]
fn unknown_combination_is_record_not_found_with_the_sorted_key() {
    let index = empty_interference_index();
    let key = CanonicalKey::new(["b", "a"]);
    let err = format_interference(&index, &key).unwrap_err();

    match err {
        Error::RecordNotFound { kind, objectives } => {
            assert_eq!(kind, ResultKind::Interference);
            assert_eq!(objectives, ["a", "b"]);
        }
        other => panic!("expected RecordNotFound, got {other:?}"),
    }
}

#[test]
fn malformed_breakdown_entries_are_dropped() {
    let index = load_index(
        ResultKind::Interference,
        &[concat!(
            r#"{"inputs":["a"],"score":0.2,"#,
            r#""breakdown":[{"axis":"endurance"},"not an object",42,null]}"#
        )],
    );

    let response = format_interference(&index, &CanonicalKey::new(["a"])).unwrap();
    assert_eq!(response.breakdown.len(), 1);
    assert_eq!(response.breakdown[0].axis.as_deref(), Some("endurance"));
    assert_eq!(response.breakdown[0].contribution, None);
}

#[test]
fn redundancy_flags_require_a_list_of_strings() {
    let index = load_index(
        ResultKind::Interference,
        &[
            r#"{"inputs":["a"],"triple":{"flags":["pair_overlap",7,"triad"]}}"#,
            r#"{"inputs":["b"],"triple":{"flags":"not a list"}}"#,
            r#"{"inputs":["c"],"triple":"not an object"}"#,
        ],
    );

    let flags = format_interference(&index, &CanonicalKey::new(["a"]))
        .unwrap()
        .redundancy_flags;
    assert_eq!(flags, ["pair_overlap", "triad"]);

    for id in ["b", "c"] {
        let flags = format_interference(&index, &CanonicalKey::new([id]))
            .unwrap()
            .redundancy_flags;
        assert!(flags.is_empty());
    }
}

// =============================================================================
// Radar / physiology formatting
// =============================================================================

#[test]
fn empty_key_radar_carries_all_five_axes_at_zero() {
    let index = load_index(
        ResultKind::Physiology,
        &[r#"{"objectives": ["unrelated"], "axes": {"endurance": 1.0}}"#],
    );

    let response = format_radar(&index, &CanonicalKey::default()).unwrap();
    assert!(response.objectives.is_empty());
    assert_eq!(
        response.labels,
        [
            "Body composition",
            "Strength & local endurance",
            "Power & speed",
            "Endurance",
            "Motor control & skill"
        ]
    );
    assert_eq!(response.values, [0.0; 5]);
    assert_eq!(response.axes.len(), 5);
    assert!(response.axes.values().all(|v| *v == 0.0));
    assert!(response.meta.is_empty());
}

#[test]
fn radar_defaults_missing_axes_to_zero() {
    let index = load_index(
        ResultKind::Physiology,
        &[concat!(
            r#"{"objectives":["a","b"],"#,
            r#""axes":{"endurance":0.8,"power_speed":0.4,"unknown_axis":9.9},"#,
            r#""meta":{"records":2}}"#
        )],
    );

    let response = format_radar(&index, &CanonicalKey::new(["b", "a"])).unwrap();
    assert_eq!(response.objectives, ["a", "b"]);
    // Values follow the fixed axis order
    assert_eq!(response.values, [0.0, 0.0, 0.4, 0.8, 0.0]);
    assert_eq!(response.axes["endurance"], 0.8);
    assert_eq!(response.axes["power_speed"], 0.4);
    // Axes outside the fixed five never appear
    assert!(!response.axes.contains_key("unknown_axis"));
    assert_eq!(response.meta["records"], 2);
}

#[test]
fn radar_meta_must_be_an_object() {
    let index = load_index(
        ResultKind::Physiology,
        &[r#"{"objectives":["a"],"axes":{},"meta":[1,2,3]}"#],
    );

    let response = format_radar(&index, &CanonicalKey::new(["a"])).unwrap();
    assert!(response.meta.is_empty());
}

#[test]
fn physiology_shape_drops_the_presentation_arrays() {
    let index = load_index(
        ResultKind::Physiology,
        &[r#"{"objectives":["a"],"axes":{"endurance":0.6},"meta":{"source":"v2"}}"#],
    );

    let response = format_physiology(&index, &CanonicalKey::new(["a"])).unwrap();
    assert_eq!(response.objectives, ["a"]);
    assert_eq!(response.axes["endurance"], 0.6);
    assert_eq!(response.meta["source"], "v2");

    let payload = serde_json::to_value(&response).unwrap();
    assert!(payload.get("labels").is_none());
    assert!(payload.get("values").is_none());
}

#[test]
fn physiology_miss_names_the_physiology_kind() {
    let index = load_index(
        ResultKind::Physiology,
        &[r#"{"objectives":["unrelated"],"axes":{}}"#],
    );

    let err = format_physiology(&index, &CanonicalKey::new(["a"])).unwrap_err();
    match err {
        Error::RecordNotFound { kind, objectives } => {
            assert_eq!(kind, ResultKind::Physiology);
            assert_eq!(objectives, ["a"]);
        }
        other => panic!("expected RecordNotFound, got {other:?}"),
    }
}
