//! Integration tests for the mode classifier
//!
//! Tests the full path: text → pattern/energy/time scoring → decision → result

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

use conlin::core::ModeClassifier;
use conlin::types::{ConlinError, DayPeriod, EnergyState, Mode};

fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 16, hour, 30, 0).unwrap()
}

/// Confidence stays in [0,1] across a spread of inputs
#[test]
fn test_confidence_always_in_range() {
    let classifier = ModeClassifier::new();
    let texts = [
        "",
        "The sky is blue.",
        "This is gold! Exploring, discovering, expanding, flowing, cascading insights emerging!",
        "Stuck, blocked, trying to debug, pushing through resistance, obstacle after obstacle",
        "feeling drained and tired but also energized somehow",
    ];
    let energies = [None, Some(0), Some(4), Some(5), Some(7), Some(8), Some(10)];

    for text in &texts {
        for energy in &energies {
            for hour in 0..24 {
                let result = classifier.classify(text, *energy, at_hour(hour)).unwrap();
                assert!(
                    (0.0..=1.0).contains(&result.confidence),
                    "confidence {} out of range for text={:?} energy={:?} hour={}",
                    result.confidence,
                    text,
                    energy,
                    hour
                );
            }
        }
    }
}

/// Mode is Mixed exactly when the two totals tie
#[test]
fn test_mixed_iff_totals_equal() {
    let classifier = ModeClassifier::new();
    let texts = ["", "stuck", "what if", "stuck in the flow", "nothing special"];

    for text in &texts {
        for hour in 0..24 {
            let result = classifier.classify(text, None, at_hour(hour)).unwrap();
            let scores = result.analysis.raw_scores;
            if scores.creation == scores.transformation {
                assert_eq!(result.mode, Mode::Mixed, "tie must be Mixed for {:?}", text);
                assert_eq!(result.confidence, 0.5);
            } else {
                assert_ne!(result.mode, Mode::Mixed, "non-tie must not be Mixed");
            }
        }
    }
}

/// Empty text, no energy, afternoon hour: only the time boost scores
#[test]
fn test_empty_text_afternoon_fixture() {
    let classifier = ModeClassifier::new();
    let result = classifier.classify("", None, at_hour(13)).unwrap();

    assert_eq!(result.analysis.creation_signals, 0);
    assert_eq!(result.analysis.transformation_signals, 0);
    assert_eq!(result.analysis.raw_scores.creation, 0);
    assert_eq!(result.analysis.raw_scores.transformation, 2);
    assert_eq!(result.mode, Mode::Transformation);
    assert!((result.confidence - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(result.analysis.time_tendency.period, DayPeriod::Afternoon);
    assert_eq!(
        result.analysis.energy_analysis.energy_state,
        EnergyState::Unspecified
    );
}

/// High-energy morning discovery text lands firmly in Creation
#[test]
fn test_discovery_fixture() {
    let classifier = ModeClassifier::new();
    let result = classifier
        .classify(
            "This is gold! What if we keep exploring and discovering?",
            Some(9),
            at_hour(7),
        )
        .unwrap();

    assert!(result.analysis.creation_signals >= 3);
    assert_eq!(result.analysis.transformation_signals, 0);
    assert_eq!(result.analysis.energy_analysis.creation_boost, 3);
    assert_eq!(result.analysis.time_tendency.creation_boost, 2);
    assert!(result.analysis.raw_scores.creation > result.analysis.raw_scores.transformation);
    assert_eq!(result.mode, Mode::Creation);
}

/// Low-energy late-afternoon debugging text lands firmly in Transformation
#[test]
fn test_debugging_fixture() {
    let classifier = ModeClassifier::new();
    let result = classifier
        .classify(
            "I'm stuck and can't figure out how to debug this, feeling drained",
            Some(3),
            at_hour(17),
        )
        .unwrap();

    assert!(result.analysis.transformation_signals >= 3);
    assert_eq!(result.analysis.raw_scores.creation, 0);
    assert_eq!(result.analysis.energy_analysis.transformation_boost, 4);
    assert_eq!(result.analysis.time_tendency.transformation_boost, 3);
    assert_eq!(result.mode, Mode::Transformation);
    assert!(result.confidence > 0.9);
}

/// suggest() returns the same fixed 5-item list whatever the confidence is
#[test]
fn test_suggestions_ignore_confidence() {
    let classifier = ModeClassifier::new();
    let baseline = classifier.suggest(Mode::Creation, 0.0);

    assert_eq!(baseline.len(), 5);
    for confidence in [0.1, 0.5, 0.73, 0.99, 1.0] {
        assert_eq!(classifier.suggest(Mode::Creation, confidence), baseline);
    }
}

/// Same arguments with a fixed timestamp give identical results
#[test]
fn test_idempotence_with_fixed_timestamp() {
    let classifier = ModeClassifier::new();
    let timestamp = at_hour(10);
    let text = "Working around constraints while new ideas keep emerging";

    let first = classifier.classify(text, Some(6), timestamp).unwrap();
    let second = classifier.classify(text, Some(6), timestamp).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// Out-of-range energy is rejected, never clamped
#[test]
fn test_energy_range_policy() {
    let classifier = ModeClassifier::new();

    let err = classifier.classify("hello", Some(11), at_hour(9)).unwrap_err();
    assert!(matches!(err, ConlinError::EnergyOutOfRange(11)));

    let err = classifier.classify("hello", Some(255), at_hour(9)).unwrap_err();
    assert!(matches!(err, ConlinError::EnergyOutOfRange(255)));

    // Both ends of the documented scale are accepted
    assert!(classifier.classify("hello", Some(0), at_hour(9)).is_ok());
    assert!(classifier.classify("hello", Some(10), at_hour(9)).is_ok());
}

/// Results serialize with kebab-case periods and round-trip through JSON
#[test]
fn test_json_round_trip() {
    let classifier = ModeClassifier::new();
    let result = classifier
        .classify("exploring options", Some(7), at_hour(11))
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"mode\""));
    assert!(json.contains("\"confidence\""));
    assert!(json.contains("\"mid-morning\""));

    let parsed: conlin::types::ClassificationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

/// Two classifiers with the same configuration agree
#[test]
fn test_fresh_instances_agree() {
    let a = ModeClassifier::new();
    let b = ModeClassifier::new();
    let timestamp = at_hour(15);

    let text = "Pushing through resistance, building on what emerged yesterday";
    assert_eq!(
        a.classify(text, None, timestamp).unwrap(),
        b.classify(text, None, timestamp).unwrap()
    );
}

/// Evening hours carry no time boost in either direction
#[test]
fn test_evening_is_neutral() {
    let classifier = ModeClassifier::new();
    for hour in [0, 3, 5, 18, 21, 23] {
        let result = classifier.classify("", None, at_hour(hour)).unwrap();
        assert_eq!(result.analysis.time_tendency.period, DayPeriod::Evening);
        assert_eq!(result.analysis.time_tendency.creation_boost, 0);
        assert_eq!(result.analysis.time_tendency.transformation_boost, 0);
        assert_eq!(result.mode, Mode::Mixed);
    }
}
