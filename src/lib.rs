// Copyright 2025 Cowboy AI, LLC.

//! # Fuzzy Overlay
//!
//! Geometry for visualizing a fuzzy variable: its membership functions, the
//! part of each one activated by an inference run, and the crisp value.
//!
//! This crate derives *what* to draw. Drawing is delegated to a [`Canvas`]:
//! - **Display curves**: one polyline per term, in term order
//! - **Fills**: the region under each activated term's cut curve
//! - **Marker**: a vertical line at the crisp value, kept visible even when
//!   the aggregate membership there is near zero
//!
//! ## Example
//!
//! ```
//! use fuzzy_overlay::{
//!     ClippedActivation, FuzzyVariable, FuzzyVariableVisualizer, RecordingCanvas,
//!     SimulationContext, Universe,
//! };
//!
//! let tip = FuzzyVariable::consequent("tip", Universe::arange(0.0, 5.0, 1.0)?)
//!     .with_term("low", vec![1.0, 0.5, 0.0, 0.0, 0.0])?
//!     .with_term("high", vec![0.0, 0.0, 0.0, 0.5, 1.0])?;
//!
//! let mut sim = SimulationContext::new();
//! sim.set_activation("tip", "high", 0.6)?;
//! sim.set_output("tip", 3.5);
//!
//! let mut canvas = RecordingCanvas::new();
//! let frame = FuzzyVariableVisualizer::new(&tip).view(&mut canvas, &ClippedActivation, Some(&sim))?;
//!
//! assert_eq!(frame.overlay.fills.len(), 1);
//! assert_eq!(frame.overlay.marker.map(|m| m.x), Some(3.5));
//! # Ok::<(), fuzzy_overlay::OverlayError>(())
//! ```

#![warn(missing_docs)]

mod composer;
mod config;
mod descriptors;
mod errors;
mod interpolate;
mod simulation;
mod universe;
mod variable;
pub mod graph;
pub mod render;
mod visualizer;

pub use composer::{
    visible_height, VariableOverlayComposer, DEFAULT_PALETTE_SIZE, VISIBILITY_FLOOR,
    VISIBILITY_REPLACEMENT,
};
pub use config::OverlayConfig;
pub use descriptors::{
    overlay_schema, ColorId, DisplayCurve, FillRegion, Marker, OverlayFrame, OverlayResult,
};
pub use errors::{OverlayError, VizResult};
pub use graph::{ControlSystemVisualizer, GraphRenderer, RuleGraph};
pub use interpolate::{Interpolator, LinearInterpolator};
pub use render::{render_overlay, Canvas, CanvasCommand, RecordingCanvas};
pub use simulation::{
    ActivationSource, ClippedActivation, CutResult, RecordedActivations, SimulationContext,
};
pub use universe::{Universe, MAX_UNIVERSE_POINTS};
pub use variable::{FuzzyVariable, Term, VariableRole};
pub use visualizer::FuzzyVariableVisualizer;
