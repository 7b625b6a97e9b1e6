//! Error types for classification and calculation

use thiserror::Error;

/// Errors produced by the classifier and calculator
#[derive(Debug, Error)]
pub enum ConlinError {
    /// Explicit energy levels live on a 0-10 scale; out-of-range values
    /// are rejected rather than clamped
    #[error("energy level {0} is out of range (expected 0-10)")]
    EnergyOutOfRange(u8),

    /// Custom pattern lists must compile at construction
    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Mixed mode has no equation form
    #[error("mixed mode has no equation; use creation or transformation")]
    MixedModeEquation,

    /// Transformation mode divides by resistance
    #[error("resistance must be positive in transformation mode, got {0}")]
    NonPositiveResistance(f64),
}
