//! Conlin: mode detection and outcome calculation for the Conlin Equations
//!
//! Detects whether work is running in Creation mode (C = P^A × R) or
//! Transformation mode (C = P^A / R) from language patterns, energy
//! signals, and time of day, and computes outcomes from the equations.

pub mod core;
pub mod types;

// =============================================================================
// SCORING WEIGHTS
// =============================================================================

/// Weight applied to each distinct pattern match
pub const PATTERN_WEIGHT: u32 = 2;

// =============================================================================
// ENERGY LEVEL BRACKETS (0-10 scale)
// =============================================================================

/// Upper bound of the explicit energy scale
pub const ENERGY_LEVEL_MAX: u8 = 10;

/// Levels at or above this count as high energy
pub const ENERGY_HIGH_MIN: u8 = 8;

/// Levels at or above this (and below high) count as medium energy
pub const ENERGY_MEDIUM_MIN: u8 = 5;

// =============================================================================
// ENERGY BOOSTS
// =============================================================================

/// Creation boost for high explicit energy
pub const ENERGY_BOOST_HIGH: u32 = 3;

/// Boost applied to both sides for medium explicit energy
pub const ENERGY_BOOST_MEDIUM: u32 = 1;

/// Transformation boost for low explicit energy
pub const ENERGY_BOOST_LOW: u32 = 2;

/// Boost when one energy word set outnumbers the other in the text
pub const WORD_ENERGY_BOOST: u32 = 2;

// =============================================================================
// TIME-OF-DAY BOOSTS
// =============================================================================

/// Creation boost for hours [6,10)
pub const TIME_BOOST_MORNING: u32 = 2;

/// Boost applied to both sides for hours [10,12)
pub const TIME_BOOST_MID_MORNING: u32 = 1;

/// Transformation boost for hours [12,16)
pub const TIME_BOOST_AFTERNOON: u32 = 2;

/// Transformation boost for hours [16,18)
pub const TIME_BOOST_LATE_AFTERNOON: u32 = 3;

// =============================================================================
// CONFIDENCE
// =============================================================================

/// Confidence reported when the two totals tie exactly
pub const MIXED_CONFIDENCE: f64 = 0.5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
