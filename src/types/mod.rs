//! Core types for Conlin

mod error;
mod mode;
mod outcome;
mod result;
mod signals;

pub use error::ConlinError;
pub use mode::Mode;
pub use outcome::{Components, EquationOutcome};
pub use result::{Analysis, ClassificationResult, RawScores};
pub use signals::{DayPeriod, EnergySignal, EnergyState, TimeTendency};
