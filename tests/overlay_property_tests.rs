// Copyright 2025 Cowboy AI, LLC.

use fuzzy_overlay::{CutResult, FuzzyVariable, Universe, VariableOverlayComposer};
use proptest::prelude::*;

const POINTS: usize = 8;

fn curve() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..=1.0, POINTS)
}

/// A variable with 1..6 uniquely labelled terms
fn variable() -> impl Strategy<Value = FuzzyVariable> {
    proptest::collection::vec(curve(), 1..6).prop_map(|curves| {
        let universe = Universe::arange(0.0, POINTS as f64, 1.0).unwrap();
        curves
            .into_iter()
            .enumerate()
            .fold(FuzzyVariable::consequent("v", universe), |v, (i, mf)| {
                v.with_term(format!("t{i}"), mf).unwrap()
            })
    })
}

/// A variable plus a cut result over a subset of its terms
fn activated() -> impl Strategy<Value = (FuzzyVariable, CutResult)> {
    variable().prop_flat_map(|v| {
        let n = v.terms().len();
        (
            Just(v),
            proptest::collection::vec(0.0f64..=1.0, n),
            proptest::collection::vec(any::<bool>(), n),
        )
            .prop_map(|(v, strengths, active)| {
                let mut aggregate = vec![0.0; POINTS];
                let mut cuts = Vec::new();
                for ((term, &s), &on) in v.terms().iter().zip(&strengths).zip(&active) {
                    if !on {
                        continue;
                    }
                    let cut: Vec<f64> = term.membership().iter().map(|&m| m.min(s)).collect();
                    for (a, &c) in aggregate.iter_mut().zip(&cut) {
                        *a = f64::max(*a, c);
                    }
                    cuts.push((term.label().to_string(), cut));
                }
                let result = cuts
                    .into_iter()
                    .fold(CutResult::new(aggregate), |r, (l, c)| r.with_cut(l, c));
                (v, result)
            })
    })
}

proptest! {
    #[test]
    fn display_follows_term_order((v, idx) in variable().prop_flat_map(|v| {
        let n = v.terms().len();
        (Just(v), 0..n)
    })) {
        let mut composer = VariableOverlayComposer::new();
        let highlighted = v.terms()[idx].label().to_string();
        let curves = composer.initialize_display(&v, Some(&highlighted)).unwrap();

        let expected: Vec<&str> = v.terms().iter().map(|t| t.label()).collect();
        let got: Vec<&str> = curves.iter().map(|c| c.label.as_str()).collect();
        prop_assert_eq!(got, expected);
        for (i, c) in curves.iter().enumerate() {
            prop_assert_eq!(c.emphasized, i == idx);
            prop_assert_eq!(c.points.len(), POINTS);
        }
    }

    #[test]
    fn compose_is_idempotent((v, cuts) in activated(), crisp in proptest::option::of(-2.0f64..10.0)) {
        let mut composer = VariableOverlayComposer::new();
        composer.initialize_display(&v, None).unwrap();
        let first = composer.compose_activation(&v, Some(&cuts), crisp).unwrap();
        let second = composer.compose_activation(&v, Some(&cuts), crisp).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fill_color_matches_curve_color((v, cuts) in activated()) {
        let mut composer = VariableOverlayComposer::new();
        let curves = composer.initialize_display(&v, None).unwrap();
        for _ in 0..2 {
            let overlay = composer.compose_activation(&v, Some(&cuts), None).unwrap();
            for fill in &overlay.fills {
                let curve = curves.iter().find(|c| c.label == fill.label).unwrap();
                prop_assert_eq!(fill.color, curve.color);
            }
        }
    }

    #[test]
    fn marker_is_visible_when_present((v, cuts) in activated(), crisp in -2.0f64..10.0) {
        let mut composer = VariableOverlayComposer::new();
        let overlay = composer.compose_activation(&v, Some(&cuts), Some(crisp)).unwrap();
        match overlay.marker {
            Some(marker) => {
                prop_assert!(!overlay.fills.is_empty());
                prop_assert_eq!(marker.x, crisp);
                prop_assert_eq!(marker.y_span.0, 0.0);
                prop_assert!(marker.y_span.1 >= 0.1);
                prop_assert!(marker.y_span.1 <= 1.0);
            }
            None => prop_assert!(overlay.fills.is_empty()),
        }
    }

    #[test]
    fn fills_stay_between_zero_and_cut((v, cuts) in activated()) {
        let mut composer = VariableOverlayComposer::new();
        let overlay = composer.compose_activation(&v, Some(&cuts), None).unwrap();
        for fill in &overlay.fills {
            prop_assert!(fill.lower.iter().all(|&l| l == 0.0));
            prop_assert_eq!(&fill.upper, &cuts.cuts()[fill.label.as_str()]);
            prop_assert_eq!(fill.xs.as_slice(), v.universe().values());
        }
    }
}
