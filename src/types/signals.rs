//! Signal structures for the mode classifier

use serde::{Deserialize, Serialize};

/// Energy bracket derived from an explicit 0-10 level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyState {
    /// Level >= 8
    High,
    /// Level in 5-7
    Medium,
    /// Level < 5
    Low,
    /// No explicit level supplied
    Unspecified,
}

impl std::fmt::Display for EnergyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnergyState::High => "high",
            EnergyState::Medium => "medium",
            EnergyState::Low => "low",
            EnergyState::Unspecified => "unspecified",
        };
        write!(f, "{}", name)
    }
}

/// Period of day derived from the hour (0-23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayPeriod {
    /// Hours [6,10)
    Morning,
    /// Hours [10,12)
    MidMorning,
    /// Hours [12,16)
    Afternoon,
    /// Hours [16,18)
    LateAfternoon,
    /// All remaining hours; mode depends on energy state
    Evening,
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayPeriod::Morning => "morning",
            DayPeriod::MidMorning => "mid-morning",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::LateAfternoon => "late-afternoon",
            DayPeriod::Evening => "evening",
        };
        write!(f, "{}", name)
    }
}

/// Energy contribution to the mode totals, derived fresh per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergySignal {
    pub creation_boost: u32,
    pub transformation_boost: u32,
    pub energy_state: EnergyState,
}

impl EnergySignal {
    /// No boosts, no explicit level
    pub fn unspecified() -> Self {
        Self {
            creation_boost: 0,
            transformation_boost: 0,
            energy_state: EnergyState::Unspecified,
        }
    }
}

/// Time-of-day contribution to the mode totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTendency {
    pub creation_boost: u32,
    pub transformation_boost: u32,
    pub period: DayPeriod,
}
