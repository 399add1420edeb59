// Copyright 2025 Cowboy AI, LLC.

//! Interpolation of a membership curve at an arbitrary x position

use crate::universe::Universe;

/// Evaluates a curve sampled on a universe at a point between samples
pub trait Interpolator {
    /// Height of `curve` at `x0`
    ///
    /// `curve` has one value per universe point; callers check this.
    fn interpolate(&self, universe: &Universe, curve: &[f64], x0: f64) -> f64;
}

/// Piecewise-linear interpolation that clamps to the nearest endpoint
/// outside the universe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, universe: &Universe, curve: &[f64], x0: f64) -> f64 {
        let xs = universe.values();
        let last = xs.len() - 1;

        if x0 <= xs[0] {
            return curve[0];
        }
        if x0 >= xs[last] {
            return curve[last];
        }

        // xs[j] <= x0 < xs[j + 1], so the segment has non-zero width
        let j = xs.partition_point(|&x| x <= x0) - 1;
        let (x_lo, x_hi) = (xs[j], xs[j + 1]);
        let (y_lo, y_hi) = (curve[j], curve[j + 1]);
        y_lo + (y_hi - y_lo) * (x0 - x_lo) / (x_hi - x_lo)
    }
}
