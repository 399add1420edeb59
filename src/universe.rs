// Copyright 2025 Cowboy AI, LLC.

//! The ordered numeric domain shared by a fuzzy variable and its terms

use crate::errors::{OverlayError, VizResult};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of points [`Universe::arange`] will generate
pub const MAX_UNIVERSE_POINTS: usize = 10_000_000;

/// Ordered, non-empty sequence of finite reals
///
/// Values are non-decreasing. Every membership curve defined over a universe
/// has exactly `len()` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Universe(Vec<f64>);

impl Universe {
    /// Create a universe from explicit sample points
    pub fn new(values: Vec<f64>) -> VizResult<Self> {
        if values.is_empty() {
            return Err(OverlayError::configuration("universe must not be empty"));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(OverlayError::configuration(format!(
                "universe value at index {idx} is not finite"
            )));
        }
        if let Some(idx) = values.windows(2).position(|w| w[1] < w[0]) {
            return Err(OverlayError::configuration(format!(
                "universe must be non-decreasing, but {} follows {} at index {}",
                values[idx + 1],
                values[idx],
                idx + 1
            )));
        }
        Ok(Self(values))
    }

    /// Evenly spaced values in `[start, stop)` with the given step
    pub fn arange(start: f64, stop: f64, step: f64) -> VizResult<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(OverlayError::configuration(format!(
                "universe step must be positive, got {step}"
            )));
        }
        if !(start.is_finite() && stop.is_finite()) || stop <= start {
            return Err(OverlayError::configuration(format!(
                "universe range [{start}, {stop}) is empty"
            )));
        }
        let count = ((stop - start) / step).ceil();
        if !count.is_finite() || count > MAX_UNIVERSE_POINTS as f64 {
            return Err(OverlayError::configuration(format!(
                "universe [{start}, {stop}) with step {step} exceeds {MAX_UNIVERSE_POINTS} points"
            )));
        }
        let count = count as usize;
        Self::new((0..count).map(|i| start + i as f64 * step).collect())
    }

    /// Sample points in ascending order
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of sample points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Fail unless `curve` has one point per universe value
    pub fn check_curve(&self, what: &str, curve: &[f64]) -> VizResult<()> {
        if curve.len() != self.len() {
            return Err(OverlayError::configuration(format!(
                "{what} has {} points but the universe has {}",
                curve.len(),
                self.len()
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for Universe {
    type Error = OverlayError;

    fn try_from(values: Vec<f64>) -> VizResult<Self> {
        Self::new(values)
    }
}

impl From<Universe> for Vec<f64> {
    fn from(universe: Universe) -> Self {
        universe.0
    }
}
