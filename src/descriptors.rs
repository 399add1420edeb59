// Copyright 2025 Cowboy AI, LLC.

//! Drawable descriptors produced by the composer
//!
//! These are plain data. A [`crate::render::Canvas`] turns them into pixels;
//! they also serialize so a backend in another process can draw them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color identity of a term within one composer
///
/// An index into the backend's color cycle. A term's fill always carries the
/// same identity as its display curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ColorId(pub usize);

/// One term's membership curve as a polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayCurve {
    /// Term label, also the legend entry
    pub label: String,
    /// `(universe[i], membership[i])` pairs in universe order
    pub points: Vec<(f64, f64)>,
    /// Draw with the emphasized line width
    pub emphasized: bool,
    /// Color identity shared with the term's fill
    pub color: ColorId,
}

/// Region between zero and a term's cut curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FillRegion {
    /// Term label
    pub label: String,
    /// Universe values
    pub xs: Vec<f64>,
    /// Lower bound, all zeros
    pub lower: Vec<f64>,
    /// Upper bound, the cut curve
    pub upper: Vec<f64>,
    /// Color identity of the term's display curve
    pub color: ColorId,
}

/// Vertical line at the crisp value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Marker {
    /// Crisp value
    pub x: f64,
    /// Always starts at zero
    pub y_span: (f64, f64),
}

impl Marker {
    /// Top of the marker
    pub fn height(&self) -> f64 {
        self.y_span.1
    }
}

/// Activation overlay of one variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OverlayResult {
    /// One fill per activated term, in cut order
    pub fills: Vec<FillRegion>,
    /// Crisp value marker, if any
    pub marker: Option<Marker>,
}

impl OverlayResult {
    /// Nothing activated
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is nothing to draw on top of the curves
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.marker.is_none()
    }
}

/// Everything drawn for one variable in one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OverlayFrame {
    /// Variable display name
    pub variable: String,
    /// Horizontal extent `[universe.min, universe.max]`
    pub x_limits: (f64, f64),
    /// Display curves in term order
    pub curves: Vec<DisplayCurve>,
    /// Fills and marker
    pub overlay: OverlayResult,
}

impl OverlayFrame {
    /// Serialize to JSON
    pub fn to_json(&self) -> crate::errors::VizResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// JSON Schema describing [`OverlayFrame`]
pub fn overlay_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(OverlayFrame)
}
