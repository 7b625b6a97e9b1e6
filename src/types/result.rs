//! Classification output structures

use serde::{Deserialize, Serialize};

use crate::types::{EnergySignal, Mode, TimeTendency};

/// Weighted totals for each side of the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScores {
    pub creation: u32,
    pub transformation: u32,
}

/// Diagnostic breakdown behind a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Distinct creation patterns that matched
    pub creation_signals: u32,
    /// Distinct transformation patterns that matched
    pub transformation_signals: u32,
    pub energy_analysis: EnergySignal,
    pub time_tendency: TimeTendency,
    pub raw_scores: RawScores,
}

/// Full result of a classify call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub mode: Mode,
    /// Always in [0,1]; exactly 0.5 when mode is Mixed
    pub confidence: f64,
    pub analysis: Analysis,
}

impl ClassificationResult {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.mode.color_code();
        let reset = Mode::color_reset();
        let emoji = self.mode.emoji();

        format!(
            "{}{} mode={} | confidence={:.1}% | signals: creation={} transformation={} | period={}{}",
            color,
            emoji,
            self.mode,
            self.confidence * 100.0,
            self.analysis.creation_signals,
            self.analysis.transformation_signals,
            self.analysis.time_tendency.period,
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "mode={} | confidence={:.3} | creation={} | transformation={} | period={}",
            self.mode,
            self.confidence,
            self.analysis.raw_scores.creation,
            self.analysis.raw_scores.transformation,
            self.analysis.time_tendency.period
        )
    }
}
