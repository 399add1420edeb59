// Copyright 2025 Cowboy AI, LLC.

//! One visualization session for a fuzzy variable
//!
//! ```mermaid
//! graph LR
//!     V[FuzzyVariable] --> C[VariableOverlayComposer]
//!     A[ActivationSource] --> C
//!     S[SimulationContext] --> C
//!     C --> F[OverlayFrame]
//!     F --> R[render_overlay]
//!     R --> K[Canvas]
//! ```

use crate::composer::VariableOverlayComposer;
use crate::config::OverlayConfig;
use crate::descriptors::OverlayFrame;
use crate::errors::{OverlayError, VizResult};
use crate::render::{render_overlay, Canvas};
use crate::simulation::{ActivationSource, SimulationContext};
use crate::variable::FuzzyVariable;
use tracing::info;

/// Draws a variable's terms together with a simulation's activation
///
/// Built from a whole variable, or from one of its terms, in which case that
/// term is drawn emphasized. Owns its composer, so fill colors stay matched
/// to curve colors across repeated views.
#[derive(Debug, Clone)]
pub struct FuzzyVariableVisualizer<'a> {
    variable: &'a FuzzyVariable,
    highlighted: Option<String>,
    composer: VariableOverlayComposer,
    config: OverlayConfig,
}

impl<'a> FuzzyVariableVisualizer<'a> {
    /// Visualize every term of `variable` with equal weight
    pub fn new(variable: &'a FuzzyVariable) -> Self {
        let config = OverlayConfig::default();
        Self {
            variable,
            highlighted: None,
            composer: VariableOverlayComposer::new().with_palette_size(config.palette_size),
            config,
        }
    }

    /// Visualize `variable` with `term` emphasized
    pub fn for_term(variable: &'a FuzzyVariable, term: &str) -> VizResult<Self> {
        if variable.term(term).is_none() {
            return Err(OverlayError::consistency(format!(
                "term '{}' is not defined on variable '{}'",
                term,
                variable.label()
            )));
        }
        let mut visualizer = Self::new(variable);
        visualizer.highlighted = Some(term.to_string());
        Ok(visualizer)
    }

    /// Replace the rendering configuration
    pub fn with_config(mut self, config: OverlayConfig) -> VizResult<Self> {
        config.validate()?;
        self.composer = VariableOverlayComposer::new().with_palette_size(config.palette_size);
        self.config = config;
        Ok(self)
    }

    /// Variable being visualized
    pub fn variable(&self) -> &FuzzyVariable {
        self.variable
    }

    /// Emphasized term, if any
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Compose the frame without drawing it
    ///
    /// `simulation` may be absent, which previews the bare membership
    /// functions with nothing activated.
    pub fn compose(
        &mut self,
        activation: &dyn ActivationSource,
        simulation: Option<&SimulationContext>,
    ) -> VizResult<OverlayFrame> {
        let curves = self
            .composer
            .initialize_display(self.variable, self.highlighted.as_deref())?;
        let overlay = self
            .composer
            .compose_simulation(self.variable, activation, simulation)?;
        let universe = self.variable.universe();
        Ok(OverlayFrame {
            variable: self.variable.label().to_string(),
            x_limits: (universe.min(), universe.max()),
            curves,
            overlay,
        })
    }

    /// Compose the frame and draw it on `canvas`
    ///
    /// Nothing is drawn if composition fails.
    pub fn view<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        activation: &dyn ActivationSource,
        simulation: Option<&SimulationContext>,
    ) -> VizResult<OverlayFrame> {
        let frame = self.compose(activation, simulation)?;
        render_overlay(canvas, &frame, &self.config);
        info!(
            variable = %frame.variable,
            curves = frame.curves.len(),
            fills = frame.overlay.fills.len(),
            marker = frame.overlay.marker.is_some(),
            "Rendered fuzzy variable view"
        );
        Ok(frame)
    }
}
