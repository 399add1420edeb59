// Copyright 2025 Cowboy AI, LLC.

//! Simulation context and the activation collaborator
//!
//! A [`SimulationContext`] carries what one run of a fuzzy system produced:
//! assigned inputs, computed outputs, and how strongly each term fired.
//! An [`ActivationSource`] turns that into a [`CutResult`] for one variable.

use crate::errors::{OverlayError, VizResult};
use crate::variable::{FuzzyVariable, VariableRole};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Crisp values and term activations for one simulation run
///
/// The default context has nothing assigned, so every lookup yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationContext {
    inputs: HashMap<String, f64>,
    outputs: HashMap<String, f64>,
    activations: HashMap<String, IndexMap<String, f64>>,
}

impl SimulationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the crisp input of an antecedent
    pub fn set_input(&mut self, variable: impl Into<String>, value: f64) {
        self.inputs.insert(variable.into(), value);
    }

    /// Record the computed crisp output of a consequent
    pub fn set_output(&mut self, variable: impl Into<String>, value: f64) {
        self.outputs.insert(variable.into(), value);
    }

    /// Record how strongly a term fired, in `[0, 1]`
    pub fn set_activation(
        &mut self,
        variable: impl Into<String>,
        term: impl Into<String>,
        strength: f64,
    ) -> VizResult<()> {
        let term = term.into();
        if !(0.0..=1.0).contains(&strength) {
            return Err(OverlayError::configuration(format!(
                "activation of term '{term}' must be in [0, 1], got {strength}"
            )));
        }
        self.activations
            .entry(variable.into())
            .or_default()
            .insert(term, strength);
        Ok(())
    }

    /// Assigned input value for `variable`, if any
    pub fn input(&self, variable: &str) -> Option<f64> {
        self.inputs.get(variable).copied()
    }

    /// Computed output value for `variable`, if any
    pub fn output(&self, variable: &str) -> Option<f64> {
        self.outputs.get(variable).copied()
    }

    /// Term activations recorded for `variable`, in recording order
    pub fn activations(&self, variable: &str) -> Option<&IndexMap<String, f64>> {
        self.activations.get(variable)
    }

    /// Crisp value of `variable` according to its role
    ///
    /// Inputs read the assigned input, outputs read the computed output,
    /// intermediate variables never have one.
    pub fn crisp_value(&self, variable: &FuzzyVariable) -> Option<f64> {
        match variable.role() {
            VariableRole::Input => self.input(variable.label()),
            VariableRole::Output => self.output(variable.label()),
            VariableRole::Intermediate => None,
        }
    }
}

/// Aggregate output curve plus the cut curve of each activated term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutResult {
    aggregate: Vec<f64>,
    cuts: IndexMap<String, Vec<f64>>,
}

impl CutResult {
    /// Create a result with the given aggregate and no cuts yet
    pub fn new(aggregate: Vec<f64>) -> Self {
        Self {
            aggregate,
            cuts: IndexMap::new(),
        }
    }

    /// Add the cut curve for one term
    pub fn with_cut(mut self, label: impl Into<String>, cut: Vec<f64>) -> Self {
        self.cuts.insert(label.into(), cut);
        self
    }

    /// Aggregate output membership over the universe
    pub fn aggregate(&self) -> &[f64] {
        &self.aggregate
    }

    /// Cut curves keyed by term label
    pub fn cuts(&self) -> &IndexMap<String, Vec<f64>> {
        &self.cuts
    }

    /// True when no term was activated
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// True when the aggregate curve carries no membership anywhere
    pub fn aggregate_is_zero(&self) -> bool {
        self.aggregate.iter().all(|&m| m == 0.0)
    }
}

/// Derives the cut curves of a variable for a simulation run
pub trait ActivationSource {
    /// Compute the [`CutResult`] for `variable` under `simulation`
    fn derive_cuts(
        &self,
        variable: &FuzzyVariable,
        simulation: &SimulationContext,
    ) -> VizResult<CutResult>;
}

/// Clips each term at its recorded firing strength
///
/// cut = min(strength, membership) at every point; the aggregate is the
/// pointwise maximum of all cuts. Terms with zero strength are left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClippedActivation;

impl ActivationSource for ClippedActivation {
    fn derive_cuts(
        &self,
        variable: &FuzzyVariable,
        simulation: &SimulationContext,
    ) -> VizResult<CutResult> {
        let mut result = CutResult::new(vec![0.0; variable.universe().len()]);
        let Some(strengths) = simulation.activations(variable.label()) else {
            return Ok(result);
        };

        for (label, &strength) in strengths {
            let term = variable.term(label).ok_or_else(|| {
                OverlayError::consistency(format!(
                    "activation recorded for term '{}' which variable '{}' does not define",
                    label,
                    variable.label()
                ))
            })?;
            if strength == 0.0 {
                continue;
            }
            let cut: Vec<f64> = term.membership().iter().map(|&m| m.min(strength)).collect();
            for (agg, &c) in result.aggregate.iter_mut().zip(&cut) {
                *agg = agg.max(c);
            }
            result.cuts.insert(label.clone(), cut);
        }
        Ok(result)
    }
}

/// Cut results computed elsewhere, keyed by variable label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedActivations {
    results: HashMap<String, CutResult>,
}

impl RecordedActivations {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result for one variable
    pub fn record(&mut self, variable: impl Into<String>, result: CutResult) {
        self.results.insert(variable.into(), result);
    }
}

impl ActivationSource for RecordedActivations {
    fn derive_cuts(
        &self,
        variable: &FuzzyVariable,
        _simulation: &SimulationContext,
    ) -> VizResult<CutResult> {
        Ok(self
            .results
            .get(variable.label())
            .cloned()
            .unwrap_or_else(|| CutResult::new(vec![0.0; variable.universe().len()])))
    }
}
