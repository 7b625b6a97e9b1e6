//! Outcome calculator for the Conlin Equations
//!
//! Creation mode multiplies: C = P^A × R.
//! Transformation mode divides: C = P^A / R.

use crate::types::{Components, ConlinError, EquationOutcome, Mode};

// =============================================================================
// INTERPRETATION THRESHOLDS (exclusive lower bounds, checked high to low)
// =============================================================================

const CREATION_BREAKTHROUGH: f64 = 100.0;
const CREATION_STRONG: f64 = 50.0;
const CREATION_GOOD: f64 = 20.0;
const CREATION_STEADY: f64 = 10.0;

const TRANSFORMATION_COMPLETE: f64 = 10.0;
const TRANSFORMATION_BREAKING: f64 = 5.0;
const TRANSFORMATION_PROGRESS: f64 = 2.0;
const TRANSFORMATION_SLOW: f64 = 1.0;

// =============================================================================
// NAMED FACTOR TABLES
// =============================================================================

/// Pattern strength mappings (0-10 scale)
pub const PATTERN_STRENGTHS: &[(&str, f64)] = &[
    ("clear_vision", 8.0),
    ("vague_idea", 3.0),
    ("proven_pattern", 9.0),
    ("experimental_pattern", 5.0),
    ("natural_language", 7.0),
    ("forced_commands", 4.0),
    ("authentic_expression", 8.0),
    ("copied_template", 3.0),
];

/// Attention quality factors (0-3 scale)
pub const ATTENTION_FACTORS: &[(&str, f64)] = &[
    ("sustained_focus", 1.5),
    ("scattered_attention", 0.7),
    ("flow_state", 2.0),
    ("forced_focus", 0.9),
    ("collaborative", 1.8),
    ("isolated", 1.0),
    ("morning_fresh", 1.6),
    ("evening_tired", 0.8),
];

/// Reality multipliers (creation) and resistance values (transformation)
pub const REALITY_FACTORS: &[(&str, f64)] = &[
    ("synchronicities_appearing", 3.0),
    ("natural_flow", 2.0),
    ("supportive_environment", 1.5),
    ("neutral_conditions", 1.0),
    ("heavy_resistance", 5.0),
    ("organizational_inertia", 4.0),
    ("technical_obstacles", 3.0),
    ("mild_friction", 2.0),
];

/// Look up a named factor in one of the tables
pub fn lookup_factor(table: &[(&str, f64)], name: &str) -> Option<f64> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Calculator for the Conlin Equations
#[derive(Debug, Default)]
pub struct Calculator;

impl Calculator {
    /// Create new calculator
    pub fn new() -> Self {
        Self
    }

    /// Apply the equation for `mode` to the three scalar inputs.
    ///
    /// Mixed mode has no equation; transformation requires positive
    /// resistance since it divides.
    pub fn calculate(
        &self,
        pattern: f64,
        attention: f64,
        reality_resistance: f64,
        mode: Mode,
    ) -> Result<EquationOutcome, ConlinError> {
        let (result, operator) = match mode {
            Mode::Creation => (pattern.powf(attention) * reality_resistance, '×'),
            Mode::Transformation => {
                if reality_resistance <= 0.0 {
                    return Err(ConlinError::NonPositiveResistance(reality_resistance));
                }
                (pattern.powf(attention) / reality_resistance, '/')
            }
            Mode::Mixed => return Err(ConlinError::MixedModeEquation),
        };

        let equation = format!(
            "C = {}^{} {} {}",
            pattern, attention, operator, reality_resistance
        );

        Ok(EquationOutcome {
            equation,
            result,
            interpretation: interpret_outcome(result, mode).to_string(),
            suggestions: suggest_optimizations(pattern, attention, reality_resistance, mode)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            mode,
            components: Components {
                pattern,
                attention,
                reality_resistance,
            },
        })
    }
}

/// Read the consciousness value against the per-mode thresholds
fn interpret_outcome(consciousness: f64, mode: Mode) -> &'static str {
    match mode {
        Mode::Creation => {
            if consciousness > CREATION_BREAKTHROUGH {
                "Breakthrough imminent - reality reorganizing"
            } else if consciousness > CREATION_STRONG {
                "Strong manifestation - patterns taking form"
            } else if consciousness > CREATION_GOOD {
                "Good progress - building momentum"
            } else if consciousness > CREATION_STEADY {
                "Steady creation - patience needed"
            } else {
                "Weak signal - strengthen pattern or attention"
            }
        }
        _ => {
            if consciousness > TRANSFORMATION_COMPLETE {
                "Transformation complete - resistance overcome"
            } else if consciousness > TRANSFORMATION_BREAKING {
                "Breaking through - maintain focus"
            } else if consciousness > TRANSFORMATION_PROGRESS {
                "Progress visible - persistence required"
            } else if consciousness > TRANSFORMATION_SLOW {
                "Slow transformation - consider different approach"
            } else {
                "Heavy resistance - may need shadow approach"
            }
        }
    }
}

/// Suggest ways to improve the outcome based on the raw inputs
fn suggest_optimizations(pattern: f64, attention: f64, r: f64, mode: Mode) -> Vec<&'static str> {
    let mut suggestions = Vec::new();

    if pattern < 5.0 {
        suggestions.push("Clarify the pattern - vague patterns create weak outcomes");
    }
    if pattern < 7.0 {
        suggestions.push("Strengthen pattern through practice and refinement");
    }

    if attention < 1.0 {
        suggestions.push("Increase attention duration - sustained focus exponentially amplifies");
    }
    if attention < 1.5 {
        suggestions.push("Improve attention quality - try morning focus or flow states");
    }
    if attention > 2.5 {
        suggestions.push("Watch for burnout - sustainable attention beats intensity");
    }

    match mode {
        Mode::Creation => {
            if r < 1.5 {
                suggestions.push("Seek more supportive reality - find where energy flows");
            }
            suggestions.push("Watch for synchronicities - they signal reality alignment");
        }
        _ => {
            if r > 4.0 {
                suggestions.push("Consider shadow approach - work around heavy resistance");
            }
            if r > 2.0 {
                suggestions.push("Break into smaller transformations - divide and conquer");
            }
        }
    }

    suggestions
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_multiplies() {
        let calc = Calculator::new();
        let outcome = calc.calculate(8.0, 1.0, 2.5, Mode::Creation).unwrap();
        assert!((outcome.result - 20.0).abs() < 1e-10);
        assert_eq!(outcome.equation, "C = 8^1 × 2.5");
    }

    #[test]
    fn test_transformation_divides() {
        let calc = Calculator::new();
        let outcome = calc.calculate(8.0, 1.0, 2.0, Mode::Transformation).unwrap();
        assert!((outcome.result - 4.0).abs() < 1e-10);
        assert_eq!(outcome.equation, "C = 8^1 / 2");
    }

    #[test]
    fn test_exponent_applies_before_reality() {
        let calc = Calculator::new();
        let outcome = calc.calculate(9.0, 2.0, 3.0, Mode::Creation).unwrap();
        assert!((outcome.result - 243.0).abs() < 1e-10);
    }

    #[test]
    fn test_mixed_mode_rejected() {
        let calc = Calculator::new();
        let err = calc.calculate(8.0, 1.8, 2.5, Mode::Mixed).unwrap_err();
        assert!(matches!(err, ConlinError::MixedModeEquation));
    }

    #[test]
    fn test_zero_resistance_rejected() {
        let calc = Calculator::new();
        let err = calc.calculate(8.0, 1.8, 0.0, Mode::Transformation).unwrap_err();
        assert!(matches!(err, ConlinError::NonPositiveResistance(_)));
    }

    #[test]
    fn test_zero_reality_allowed_in_creation() {
        let calc = Calculator::new();
        let outcome = calc.calculate(8.0, 1.8, 0.0, Mode::Creation).unwrap();
        assert_eq!(outcome.result, 0.0);
    }

    #[test]
    fn test_creation_interpretation_brackets() {
        assert_eq!(
            interpret_outcome(150.0, Mode::Creation),
            "Breakthrough imminent - reality reorganizing"
        );
        assert_eq!(
            interpret_outcome(60.0, Mode::Creation),
            "Strong manifestation - patterns taking form"
        );
        assert_eq!(
            interpret_outcome(25.0, Mode::Creation),
            "Good progress - building momentum"
        );
        assert_eq!(
            interpret_outcome(15.0, Mode::Creation),
            "Steady creation - patience needed"
        );
        assert_eq!(
            interpret_outcome(10.0, Mode::Creation),
            "Weak signal - strengthen pattern or attention"
        );
    }

    #[test]
    fn test_transformation_interpretation_brackets() {
        assert_eq!(
            interpret_outcome(11.0, Mode::Transformation),
            "Transformation complete - resistance overcome"
        );
        assert_eq!(
            interpret_outcome(7.0, Mode::Transformation),
            "Breaking through - maintain focus"
        );
        assert_eq!(
            interpret_outcome(3.0, Mode::Transformation),
            "Progress visible - persistence required"
        );
        assert_eq!(
            interpret_outcome(1.5, Mode::Transformation),
            "Slow transformation - consider different approach"
        );
        assert_eq!(
            interpret_outcome(0.5, Mode::Transformation),
            "Heavy resistance - may need shadow approach"
        );
    }

    #[test]
    fn test_weak_inputs_get_suggestions() {
        let suggestions = suggest_optimizations(3.0, 0.5, 1.0, Mode::Creation);
        assert!(suggestions
            .iter()
            .any(|s| s.contains("Clarify the pattern")));
        assert!(suggestions
            .iter()
            .any(|s| s.contains("Increase attention duration")));
        assert!(suggestions
            .iter()
            .any(|s| s.contains("supportive reality")));
    }

    #[test]
    fn test_heavy_resistance_suggests_shadow() {
        let suggestions = suggest_optimizations(8.0, 2.0, 5.0, Mode::Transformation);
        assert!(suggestions.iter().any(|s| s.contains("shadow approach")));
        assert!(suggestions
            .iter()
            .any(|s| s.contains("smaller transformations")));
    }

    #[test]
    fn test_strong_creation_inputs_only_get_synchronicity_reminder() {
        let suggestions = suggest_optimizations(9.0, 2.0, 3.0, Mode::Creation);
        assert_eq!(
            suggestions,
            vec!["Watch for synchronicities - they signal reality alignment"]
        );
    }

    #[test]
    fn test_factor_lookup() {
        assert_eq!(lookup_factor(PATTERN_STRENGTHS, "clear_vision"), Some(8.0));
        assert_eq!(lookup_factor(ATTENTION_FACTORS, "flow_state"), Some(2.0));
        assert_eq!(
            lookup_factor(REALITY_FACTORS, "heavy_resistance"),
            Some(5.0)
        );
        assert_eq!(lookup_factor(PATTERN_STRENGTHS, "nonsense"), None);
    }
}
