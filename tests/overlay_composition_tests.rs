// Copyright 2025 Cowboy AI, LLC.

//! Overlay composition scenarios for a single consequent variable

use fuzzy_overlay::{
    CutResult, FuzzyVariable, OverlayResult, Universe, VariableOverlayComposer,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn abc() -> FuzzyVariable {
    FuzzyVariable::consequent("output", Universe::arange(0.0, 5.0, 1.0).unwrap())
        .with_term("A", vec![1.0, 0.5, 0.0, 0.0, 0.0])
        .unwrap()
        .with_term("B", vec![0.0, 0.5, 1.0, 0.5, 0.0])
        .unwrap()
        .with_term("C", vec![0.0, 0.0, 0.0, 0.5, 1.0])
        .unwrap()
}

#[test]
fn empty_cut_result_gives_empty_overlay_for_any_crisp_value() {
    let mut composer = VariableOverlayComposer::new();
    let empty = CutResult::new(vec![0.0; 5]);
    for crisp in [None, Some(-10.0), Some(0.0), Some(2.5), Some(100.0)] {
        let overlay = composer
            .compose_activation(&abc(), Some(&empty), crisp)
            .unwrap();
        assert_eq!(overlay, OverlayResult::empty());
    }
}

#[test]
fn zero_aggregate_suppresses_existing_cut_entry() {
    let mut composer = VariableOverlayComposer::new();
    let cuts = CutResult::new(vec![0.0; 5]).with_cut("A", vec![0.0; 5]);
    let overlay = composer.compose_activation(&abc(), Some(&cuts), None).unwrap();
    assert!(overlay.fills.is_empty());
    assert!(overlay.marker.is_none());
}

#[test]
fn zero_aggregate_wins_over_unknown_label() {
    let mut composer = VariableOverlayComposer::new();
    let cuts = CutResult::new(vec![0.0; 5]).with_cut("Z", vec![0.0; 5]);
    let overlay = composer.compose_activation(&abc(), Some(&cuts), Some(1.0)).unwrap();
    assert!(overlay.is_empty());
}

#[test_case(&[0.0, 0.0, 0.05, 0.05, 0.0], 1.0 ; "near zero height is raised")]
#[test_case(&[0.0, 0.0, 0.3, 0.3, 0.0], 0.3 ; "visible height is kept")]
#[test_case(&[0.0, 0.0, 0.1, 0.1, 0.0], 0.1 ; "threshold itself is kept")]
fn crisp_marker_height(aggregate: &[f64], expected: f64) {
    let mut composer = VariableOverlayComposer::new();
    let cuts = CutResult::new(aggregate.to_vec()).with_cut("B", aggregate.to_vec());
    let overlay = composer
        .compose_activation(&abc(), Some(&cuts), Some(2.5))
        .unwrap();

    let marker = overlay.marker.expect("marker");
    assert_eq!(marker.x, 2.5);
    assert_eq!(marker.y_span.0, 0.0);
    assert!((marker.y_span.1 - expected).abs() < 1e-12, "height {}", marker.y_span.1);
}

#[test]
fn visibility_floor_replacement_is_exact() {
    let mut composer = VariableOverlayComposer::new();
    let aggregate = vec![0.0, 0.0, 0.05, 0.05, 0.0];
    let cuts = CutResult::new(aggregate.clone()).with_cut("B", aggregate);
    let overlay = composer
        .compose_activation(&abc(), Some(&cuts), Some(2.5))
        .unwrap();
    assert_eq!(overlay.marker.unwrap().y_span, (0.0, 1.0));
}

#[test]
fn no_crisp_value_means_no_marker() {
    let mut composer = VariableOverlayComposer::new();
    let aggregate = vec![0.0, 0.0, 0.3, 0.3, 0.0];
    let cuts = CutResult::new(aggregate.clone()).with_cut("B", aggregate);
    let overlay = composer.compose_activation(&abc(), Some(&cuts), None).unwrap();
    assert_eq!(overlay.fills.len(), 1);
    assert!(overlay.marker.is_none());
}

#[test]
fn unknown_label_returns_no_partial_fills() {
    let mut composer = VariableOverlayComposer::new();
    let cuts = CutResult::new(vec![0.5, 0.5, 0.0, 0.0, 0.0])
        .with_cut("A", vec![0.5, 0.5, 0.0, 0.0, 0.0])
        .with_cut("Z", vec![0.1; 5]);

    let result = composer.compose_activation(&abc(), Some(&cuts), Some(0.5));

    match result {
        Err(err) => assert!(err.is_consistency_error()),
        Ok(overlay) => panic!("expected ConsistencyError, got {overlay:?}"),
    }
}

#[test]
fn fills_follow_cut_order() {
    let mut composer = VariableOverlayComposer::new();
    let curves = composer.initialize_display(&abc(), None).unwrap();
    let cuts = CutResult::new(vec![0.4, 0.4, 0.2, 0.2, 0.2])
        .with_cut("C", vec![0.0, 0.0, 0.0, 0.2, 0.2])
        .with_cut("A", vec![0.4, 0.4, 0.0, 0.0, 0.0]);

    let overlay = composer.compose_activation(&abc(), Some(&cuts), None).unwrap();

    let labels: Vec<&str> = overlay.fills.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["C", "A"]);
    assert_eq!(overlay.fills[0].color, curves[2].color);
    assert_eq!(overlay.fills[1].color, curves[0].color);
}

#[test]
fn duplicate_labels_fail_display_with_configuration_error() {
    let json = r#"{
        "label": "output",
        "role": "Output",
        "universe": [0.0, 1.0],
        "terms": [
            {"label": "A", "membership": [1.0, 0.0]},
            {"label": "A", "membership": [0.0, 1.0]}
        ]
    }"#;
    let variable: FuzzyVariable = serde_json::from_str(json).unwrap();
    let mut composer = VariableOverlayComposer::new();

    let err = composer.initialize_display(&variable, None).unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn malformed_variable_fails_composition_before_any_output() {
    let json = r#"{
        "label": "output",
        "role": "Output",
        "universe": [0.0, 1.0, 2.0],
        "terms": [
            {"label": "A", "membership": [1.0, 0.5, 0.0]},
            {"label": "B", "membership": [0.0, 1.0]}
        ]
    }"#;
    let variable: FuzzyVariable = serde_json::from_str(json).unwrap();
    let cuts = CutResult::new(vec![0.5, 0.5, 0.0]).with_cut("A", vec![0.5, 0.5, 0.0]);
    let mut composer = VariableOverlayComposer::new();

    let err = composer
        .compose_activation(&variable, Some(&cuts), Some(1.0))
        .unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(composer.color_of("A"), None);
}

#[test_case(vec![f64::NAN; 5], vec![0.0, 0.5, 0.5, 0.0, 0.0] ; "nan aggregate")]
#[test_case(vec![0.0, 0.0, 5.0, 5.0, 0.0], vec![0.0, 0.0, 0.5, 0.5, 0.0] ; "aggregate above one")]
#[test_case(vec![0.0, 0.0, 0.5, 0.5, 0.0], vec![-2.0, 0.0, 0.5, 0.5, 0.0] ; "negative cut")]
fn out_of_range_degrees_are_configuration_errors(aggregate: Vec<f64>, cut: Vec<f64>) {
    let mut composer = VariableOverlayComposer::new();
    let cuts = CutResult::new(aggregate).with_cut("B", cut);

    let err = composer
        .compose_activation(&abc(), Some(&cuts), Some(2.5))
        .unwrap_err();
    assert!(err.is_configuration_error());
}
