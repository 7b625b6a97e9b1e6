//! Mode definitions for the Conlin Equations

use serde::{Deserialize, Serialize};

/// The three possible classification labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Flow/expansion signals dominate: C = P^A × R
    Creation,
    /// Resistance/obstacle signals dominate: C = P^A / R
    Transformation,
    /// Creation and transformation totals tie exactly
    Mixed,
}

impl Mode {
    /// Symbolic equation for this mode, if it has one
    pub fn equation(&self) -> Option<&'static str> {
        match self {
            Mode::Creation => Some("C = P^A × R"),
            Mode::Transformation => Some("C = P^A / R"),
            Mode::Mixed => None,
        }
    }

    /// Operator the mode applies to reality/resistance
    pub fn operator(&self) -> Option<char> {
        match self {
            Mode::Creation => Some('×'),
            Mode::Transformation => Some('/'),
            Mode::Mixed => None,
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Mode::Creation => "\x1b[32m",       // Green
            Mode::Transformation => "\x1b[33m", // Orange/Yellow
            Mode::Mixed => "\x1b[90m",          // Gray
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for mode
    pub fn emoji(&self) -> &'static str {
        match self {
            Mode::Creation => "🌊",
            Mode::Transformation => "🔨",
            Mode::Mixed => "🌓",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Creation => "Creation",
            Mode::Transformation => "Transformation",
            Mode::Mixed => "Mixed",
        };
        write!(f, "{}", name)
    }
}
