// Copyright 2025 Cowboy AI, LLC.

//! Overlay composition for a fuzzy variable
//!
//! [`VariableOverlayComposer`] turns a variable's terms, an optional
//! [`CutResult`] and an optional crisp value into display curves, fill
//! regions and a crisp value marker. It never draws anything.
//!
//! The only state it keeps is the color identity assigned to each term
//! label, so that a term's fill matches its curve across calls.

use crate::descriptors::{ColorId, DisplayCurve, FillRegion, Marker, OverlayResult};
use crate::errors::{OverlayError, VizResult};
use crate::interpolate::{Interpolator, LinearInterpolator};
use crate::simulation::{ActivationSource, CutResult, SimulationContext};
use crate::variable::{check_degrees, FuzzyVariable};
use indexmap::IndexMap;
use tracing::debug;

/// Marker heights below this are hard to tell apart from the baseline
pub const VISIBILITY_FLOOR: f64 = 0.1;

/// Height a marker is drawn at when it falls below [`VISIBILITY_FLOOR`]
pub const VISIBILITY_REPLACEMENT: f64 = 1.0;

/// Default number of colors in the cycle
pub const DEFAULT_PALETTE_SIZE: usize = 10;

/// Composes the drawable overlay of one fuzzy variable
#[derive(Debug, Clone)]
pub struct VariableOverlayComposer<I = LinearInterpolator> {
    interpolator: I,
    palette_size: usize,
    colors: IndexMap<String, ColorId>,
    colors_owner: Option<String>,
}

impl VariableOverlayComposer<LinearInterpolator> {
    /// Create a composer using linear interpolation
    pub fn new() -> Self {
        Self::with_interpolator(LinearInterpolator)
    }
}

impl Default for VariableOverlayComposer<LinearInterpolator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Interpolator> VariableOverlayComposer<I> {
    /// Create a composer with a custom interpolation collaborator
    pub fn with_interpolator(interpolator: I) -> Self {
        Self {
            interpolator,
            palette_size: DEFAULT_PALETTE_SIZE,
            colors: IndexMap::new(),
            colors_owner: None,
        }
    }

    /// Set how many colors the cycle has; zero is treated as one
    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size.max(1);
        self.colors.clear();
        self.colors_owner = None;
        self
    }

    /// Color identity currently cached for `label`
    pub fn color_of(&self, label: &str) -> Option<ColorId> {
        self.colors.get(label).copied()
    }

    /// One display curve per term, in term order
    ///
    /// `highlighted` marks the matching curve as emphasized. Fails with a
    /// configuration error if the variable is malformed and with a
    /// consistency error if `highlighted` names no term of the variable.
    pub fn initialize_display(
        &mut self,
        variable: &FuzzyVariable,
        highlighted: Option<&str>,
    ) -> VizResult<Vec<DisplayCurve>> {
        variable.validate()?;
        if let Some(label) = highlighted {
            if variable.term(label).is_none() {
                return Err(OverlayError::consistency(format!(
                    "highlighted term '{}' is not defined on variable '{}'",
                    label,
                    variable.label()
                )));
            }
        }
        self.prime_colors(variable);

        let xs = variable.universe().values();
        let curves = variable
            .terms()
            .iter()
            .map(|term| DisplayCurve {
                label: term.label().to_string(),
                points: xs.iter().copied().zip(term.membership().iter().copied()).collect(),
                emphasized: highlighted == Some(term.label()),
                color: self.colors[term.label()],
            })
            .collect::<Vec<_>>();

        debug!(
            variable = variable.label(),
            curves = curves.len(),
            highlighted = highlighted.unwrap_or(""),
            "Initialized display curves"
        );
        Ok(curves)
    }

    /// Fill regions and crisp marker for one activation result
    ///
    /// No cut result, an empty one, or an all-zero aggregate yields an empty
    /// overlay. A cut for a term the variable does not define fails the
    /// whole call. The marker is only produced when `crisp_value` is given
    /// and at least one fill exists.
    pub fn compose_activation(
        &mut self,
        variable: &FuzzyVariable,
        cut_result: Option<&CutResult>,
        crisp_value: Option<f64>,
    ) -> VizResult<OverlayResult> {
        variable.validate()?;
        let universe = variable.universe();

        let Some(cut_result) = cut_result.filter(|c| !c.is_empty()) else {
            debug!(variable = variable.label(), "No activation to overlay");
            return Ok(OverlayResult::empty());
        };
        universe.check_curve("aggregate output curve", cut_result.aggregate())?;
        check_degrees("aggregate output curve", cut_result.aggregate())?;
        if cut_result.aggregate_is_zero() {
            debug!(variable = variable.label(), "Aggregate output is zero everywhere");
            return Ok(OverlayResult::empty());
        }

        // Check every cut before producing any output
        for (label, cut) in cut_result.cuts() {
            if variable.term(label).is_none() {
                return Err(OverlayError::consistency(format!(
                    "cut result has term '{}' which variable '{}' does not define",
                    label,
                    variable.label()
                )));
            }
            let what = format!("cut curve of term '{label}'");
            universe.check_curve(&what, cut)?;
            check_degrees(&what, cut)?;
        }
        if let Some(x) = crisp_value {
            if !x.is_finite() {
                return Err(OverlayError::configuration(format!(
                    "crisp value of '{}' is not finite: {x}",
                    variable.label()
                )));
            }
        }

        self.prime_colors(variable);
        let zeros = vec![0.0; universe.len()];
        let fills: Vec<FillRegion> = cut_result
            .cuts()
            .iter()
            .map(|(label, cut)| FillRegion {
                label: label.clone(),
                xs: universe.values().to_vec(),
                lower: zeros.clone(),
                upper: cut.clone(),
                color: self.colors[label.as_str()],
            })
            .collect();

        let marker = crisp_value.map(|x| {
            let y = self
                .interpolator
                .interpolate(universe, cut_result.aggregate(), x);
            Marker {
                x,
                y_span: (0.0, visible_height(y)),
            }
        });

        debug!(
            variable = variable.label(),
            fills = fills.len(),
            marker = ?marker.map(|m| m.x),
            "Composed activation overlay"
        );
        Ok(OverlayResult { fills, marker })
    }

    /// Derive cuts for a simulation run and compose them
    ///
    /// The activation collaborator is consulted once. The crisp value is
    /// looked up by the variable's role; an absent simulation behaves like
    /// one where nothing has been assigned.
    pub fn compose_simulation(
        &mut self,
        variable: &FuzzyVariable,
        activation: &dyn ActivationSource,
        simulation: Option<&SimulationContext>,
    ) -> VizResult<OverlayResult> {
        let default_context;
        let simulation = match simulation {
            Some(sim) => sim,
            None => {
                default_context = SimulationContext::default();
                &default_context
            }
        };
        let cut_result = activation.derive_cuts(variable, simulation)?;
        let crisp_value = simulation.crisp_value(variable);
        self.compose_activation(variable, Some(&cut_result), crisp_value)
    }

    fn prime_colors(&mut self, variable: &FuzzyVariable) {
        let same_terms = self.colors.len() == variable.terms().len()
            && self
                .colors
                .keys()
                .zip(variable.terms())
                .all(|(cached, term)| cached == term.label());
        if self.colors_owner.as_deref() != Some(variable.label()) || !same_terms {
            self.colors.clear();
            self.colors_owner = Some(variable.label().to_string());
        }
        for term in variable.terms() {
            if !self.colors.contains_key(term.label()) {
                let next = ColorId(self.colors.len() % self.palette_size);
                self.colors.insert(term.label().to_string(), next);
            }
        }
    }
}

/// Apply the visibility floor to an interpolated marker height
pub fn visible_height(y: f64) -> f64 {
    if y < VISIBILITY_FLOOR {
        debug!(height = y, "Raising near-zero marker to stay visible");
        VISIBILITY_REPLACEMENT
    } else {
        y
    }
}
