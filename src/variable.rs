// Copyright 2025 Cowboy AI, LLC.

//! Fuzzy variables and their terms
//!
//! A [`FuzzyVariable`] exclusively owns its [`Term`]s. Terms are kept in
//! insertion order, which is also the order they are displayed in.

use crate::errors::{OverlayError, VizResult};
use crate::universe::Universe;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a variable takes part in a simulation
///
/// The role decides where its crisp value is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableRole {
    /// Antecedent fed with an assigned input value
    Input,
    /// Consequent whose value is computed by the simulation
    Output,
    /// Neither assigned nor computed; never has a crisp value
    Intermediate,
}

/// A named membership curve over its variable's universe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    label: String,
    membership: Vec<f64>,
}

impl Term {
    /// Term label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Membership degree at each universe index
    pub fn membership(&self) -> &[f64] {
        &self.membership
    }
}

/// A fuzzy variable: a universe plus an ordered set of terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyVariable {
    label: String,
    role: VariableRole,
    universe: Universe,
    terms: Vec<Term>,
}

impl FuzzyVariable {
    /// Create a variable with no terms
    pub fn new(label: impl Into<String>, role: VariableRole, universe: Universe) -> Self {
        Self {
            label: label.into(),
            role,
            universe,
            terms: Vec::new(),
        }
    }

    /// Shorthand for an [`VariableRole::Input`] variable
    pub fn antecedent(label: impl Into<String>, universe: Universe) -> Self {
        Self::new(label, VariableRole::Input, universe)
    }

    /// Shorthand for an [`VariableRole::Output`] variable
    pub fn consequent(label: impl Into<String>, universe: Universe) -> Self {
        Self::new(label, VariableRole::Output, universe)
    }

    /// Define a new term
    ///
    /// Fails if the label is already taken, the curve length does not match
    /// the universe, or a degree falls outside `[0, 1]`.
    pub fn add_term(&mut self, label: impl Into<String>, membership: Vec<f64>) -> VizResult<()> {
        let label = label.into();
        if self.term(&label).is_some() {
            return Err(OverlayError::configuration(format!(
                "variable '{}' already has a term labelled '{}'",
                self.label, label
            )));
        }
        self.universe
            .check_curve(&format!("term '{label}'"), &membership)?;
        check_degrees(&format!("term '{label}'"), &membership)?;
        self.terms.push(Term { label, membership });
        Ok(())
    }

    /// Builder form of [`FuzzyVariable::add_term`]
    pub fn with_term(mut self, label: impl Into<String>, membership: Vec<f64>) -> VizResult<Self> {
        self.add_term(label, membership)?;
        Ok(self)
    }

    /// Display name
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Simulation role
    pub fn role(&self) -> VariableRole {
        self.role
    }

    /// Shared universe
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Terms in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Look up a term by label
    pub fn term(&self, label: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.label == label)
    }

    /// Position of a term in display order
    pub fn term_index(&self, label: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.label == label)
    }

    /// Re-check the structural invariants
    ///
    /// `add_term` already enforces these; a variable obtained through
    /// deserialization has not been through it.
    pub fn validate(&self) -> VizResult<()> {
        let mut seen = HashSet::with_capacity(self.terms.len());
        for term in &self.terms {
            if !seen.insert(term.label.as_str()) {
                return Err(OverlayError::configuration(format!(
                    "variable '{}' has duplicate term label '{}'",
                    self.label, term.label
                )));
            }
            self.universe
                .check_curve(&format!("term '{}'", term.label), &term.membership)?;
            check_degrees(&format!("term '{}'", term.label), &term.membership)?;
        }
        Ok(())
    }
}

/// Reject any degree that is NaN or outside [0, 1]
pub(crate) fn check_degrees(what: &str, membership: &[f64]) -> VizResult<()> {
    match membership.iter().position(|m| !(0.0..=1.0).contains(m)) {
        Some(idx) => Err(OverlayError::configuration(format!(
            "{what} has membership {} at index {idx}, outside [0, 1]",
            membership[idx]
        ))),
        None => Ok(()),
    }
}
