//! Calculator output structures

use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// The three scalar inputs to an equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Pattern strength (0-10 scale)
    pub pattern: f64,
    /// Attention quality/duration (0-3 scale)
    pub attention: f64,
    /// Reality multiplier or resistance divisor (0-5 scale)
    pub reality_resistance: f64,
}

/// Result of applying one of the Conlin Equations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationOutcome {
    /// Rendered equation, e.g. "C = 8^1.8 × 2.5"
    pub equation: String,
    /// The computed consciousness value C
    pub result: f64,
    /// Threshold-based reading of the result
    pub interpretation: String,
    /// Ways to improve the outcome
    pub suggestions: Vec<String>,
    pub mode: Mode,
    pub components: Components,
}
