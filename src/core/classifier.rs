//! Mode classifier: scores Creation vs Transformation signals in text
//!
//! Three independent signal sources feed the totals:
//! - regex pattern matches, 2 points per distinct matching pattern
//! - energy signals (explicit 0-10 level plus energy words in the text)
//! - time-of-day tendency

use chrono::{DateTime, Timelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{
    Analysis, ClassificationResult, ConlinError, DayPeriod, EnergySignal, EnergyState, Mode,
    RawScores, TimeTendency,
};
use crate::{
    ENERGY_BOOST_HIGH, ENERGY_BOOST_LOW, ENERGY_BOOST_MEDIUM, ENERGY_HIGH_MIN, ENERGY_LEVEL_MAX,
    ENERGY_MEDIUM_MIN, MIXED_CONFIDENCE, PATTERN_WEIGHT, TIME_BOOST_AFTERNOON,
    TIME_BOOST_LATE_AFTERNOON, TIME_BOOST_MID_MORNING, TIME_BOOST_MORNING, WORD_ENERGY_BOOST,
};

// =============================================================================
// BUILT-IN PATTERN LISTS
// Matched against lower-cased text; each pattern counts at most once.
// =============================================================================

/// Creation signal patterns (flow, discovery, expansion)
pub const CREATION_PATTERNS: &[&str] = &[
    r"this is gold!?",
    r"holy shit",
    r"what if",
    r"explor",
    r"discover",
    r"building on",
    r"energy (is )?increas",
    r"flow(ing)?",
    r"cascad",
    r"emerg",
    r"multiplying",
    r"expanding",
    r"resonat",
    r"synchronicit",
];

/// Transformation signal patterns (obstruction, effort, resistance)
pub const TRANSFORMATION_PATTERNS: &[&str] = &[
    r"stuck",
    r"blocked",
    r"trying to",
    r"can't figure",
    r"debug",
    r"overcom",
    r"push(ing)? through",
    r"resistance",
    r"obstacle",
    r"constraint",
    r"focus(ed|ing) on",
    r"breaking through",
    r"shadow (work|building)",
    r"working around",
];

/// Words that read as high energy
pub const HIGH_ENERGY_WORDS: &[&str] = &["energized", "excited", "flowing", "inspired", "fresh"];

/// Words that read as depleted energy
pub const LOW_ENERGY_WORDS: &[&str] = &["tired", "depleted", "exhausted", "stuck", "drained"];

lazy_static! {
    static ref DEFAULT_CREATION: Vec<Regex> =
        compile_patterns(CREATION_PATTERNS).expect("built-in creation patterns are valid");
    static ref DEFAULT_TRANSFORMATION: Vec<Regex> =
        compile_patterns(TRANSFORMATION_PATTERNS).expect("built-in transformation patterns are valid");
}

/// Compile a pattern list, failing on the first invalid pattern
fn compile_patterns(patterns: &[&str]) -> Result<Vec<Regex>, ConlinError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|source| ConlinError::InvalidPattern {
                pattern: (*p).to_string(),
                source,
            })
        })
        .collect()
}

// =============================================================================
// SUGGESTION LISTS
// =============================================================================

const CREATION_SUGGESTIONS: &[&str] = &[
    "Ride the flow - explore broadly",
    "Capture insights as they cascade",
    "Build on discoveries naturally",
    "Let reality multiply the pattern",
    "Trust synchronicities appearing",
];

const TRANSFORMATION_SUGGESTIONS: &[&str] = &[
    "Focus on one specific obstacle",
    "Apply concentrated attention",
    "Break the problem into smaller pieces",
    "Use shadow building if blocked",
    "Remember: resistance transforms through focus",
];

const MIXED_SUGGESTIONS: &[&str] = &[
    "Mode is shifting - stay aware",
    "Notice what's trying to emerge",
    "Be ready to switch approaches",
    "Check energy levels",
    "Small experiments to find direction",
];

/// Mode classifier with fixed pattern and word lists
#[derive(Debug, Clone)]
pub struct ModeClassifier {
    creation_patterns: Vec<Regex>,
    transformation_patterns: Vec<Regex>,
    high_energy_words: Vec<String>,
    low_energy_words: Vec<String>,
}

impl Default for ModeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeClassifier {
    /// Create a classifier with the built-in pattern and word lists
    pub fn new() -> Self {
        Self {
            creation_patterns: DEFAULT_CREATION.clone(),
            transformation_patterns: DEFAULT_TRANSFORMATION.clone(),
            high_energy_words: HIGH_ENERGY_WORDS.iter().map(|w| w.to_string()).collect(),
            low_energy_words: LOW_ENERGY_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Create a classifier with custom lists; invalid patterns fail here,
    /// never at classify time
    pub fn with_patterns(
        creation_patterns: &[&str],
        transformation_patterns: &[&str],
        high_energy_words: &[&str],
        low_energy_words: &[&str],
    ) -> Result<Self, ConlinError> {
        Ok(Self {
            creation_patterns: compile_patterns(creation_patterns)?,
            transformation_patterns: compile_patterns(transformation_patterns)?,
            high_energy_words: high_energy_words.iter().map(|w| w.to_string()).collect(),
            low_energy_words: low_energy_words.iter().map(|w| w.to_string()).collect(),
        })
    }

    /// Classify text at an explicit timestamp.
    ///
    /// Fails only when `energy_level` is outside 0-10; any string,
    /// including empty, yields a result.
    pub fn classify(
        &self,
        text: &str,
        energy_level: Option<u8>,
        timestamp: DateTime<Utc>,
    ) -> Result<ClassificationResult, ConlinError> {
        if let Some(level) = energy_level {
            if level > ENERGY_LEVEL_MAX {
                return Err(ConlinError::EnergyOutOfRange(level));
            }
        }

        let text_lower = text.to_lowercase();

        let creation_signals = count_signals(&self.creation_patterns, &text_lower);
        let transformation_signals = count_signals(&self.transformation_patterns, &text_lower);

        let energy_analysis = self.analyze_energy(&text_lower, energy_level);
        let time_tendency = time_tendency(timestamp.hour());

        let creation_total = creation_signals * PATTERN_WEIGHT
            + energy_analysis.creation_boost
            + time_tendency.creation_boost;
        let transformation_total = transformation_signals * PATTERN_WEIGHT
            + energy_analysis.transformation_boost
            + time_tendency.transformation_boost;

        let (mode, confidence) = decide(creation_total, transformation_total);

        Ok(ClassificationResult {
            mode,
            confidence,
            analysis: Analysis {
                creation_signals,
                transformation_signals,
                energy_analysis,
                time_tendency,
                raw_scores: RawScores {
                    creation: creation_total,
                    transformation: transformation_total,
                },
            },
        })
    }

    /// Classify with the current wall clock. Top-level convenience only;
    /// tests and library callers should pass a timestamp to `classify`.
    pub fn classify_now(
        &self,
        text: &str,
        energy_level: Option<u8>,
    ) -> Result<ClassificationResult, ConlinError> {
        self.classify(text, energy_level, Utc::now())
    }

    /// Fixed advisory list for a mode. `confidence` is part of the call
    /// signature but does not influence which list comes back.
    pub fn suggest(&self, mode: Mode, _confidence: f64) -> &'static [&'static str] {
        match mode {
            Mode::Creation => CREATION_SUGGESTIONS,
            Mode::Transformation => TRANSFORMATION_SUGGESTIONS,
            Mode::Mixed => MIXED_SUGGESTIONS,
        }
    }

    /// Derive energy boosts from the explicit level and energy words.
    /// The word-count boost stacks on top of the level-based boost.
    fn analyze_energy(&self, text_lower: &str, energy_level: Option<u8>) -> EnergySignal {
        let high_count = count_words(&self.high_energy_words, text_lower);
        let low_count = count_words(&self.low_energy_words, text_lower);

        let mut signal = match energy_level {
            Some(level) if level >= ENERGY_HIGH_MIN => EnergySignal {
                creation_boost: ENERGY_BOOST_HIGH,
                transformation_boost: 0,
                energy_state: EnergyState::High,
            },
            Some(level) if level >= ENERGY_MEDIUM_MIN => EnergySignal {
                creation_boost: ENERGY_BOOST_MEDIUM,
                transformation_boost: ENERGY_BOOST_MEDIUM,
                energy_state: EnergyState::Medium,
            },
            Some(_) => EnergySignal {
                creation_boost: 0,
                transformation_boost: ENERGY_BOOST_LOW,
                energy_state: EnergyState::Low,
            },
            None => EnergySignal::unspecified(),
        };

        if high_count > low_count {
            signal.creation_boost += WORD_ENERGY_BOOST;
        } else if low_count > high_count {
            signal.transformation_boost += WORD_ENERGY_BOOST;
        }

        signal
    }
}

/// Count distinct patterns that match anywhere in the text.
/// Multiple matches of one pattern still count once.
fn count_signals(patterns: &[Regex], text_lower: &str) -> u32 {
    patterns.iter().filter(|re| re.is_match(text_lower)).count() as u32
}

/// Count distinct words present in the text, each at most once
fn count_words(words: &[String], text_lower: &str) -> u32 {
    words
        .iter()
        .filter(|w| text_lower.contains(w.as_str()))
        .count() as u32
}

/// Mode tendency for the hour of day (0-23)
fn time_tendency(hour: u32) -> TimeTendency {
    match hour {
        6..=9 => TimeTendency {
            creation_boost: TIME_BOOST_MORNING,
            transformation_boost: 0,
            period: DayPeriod::Morning,
        },
        10..=11 => TimeTendency {
            creation_boost: TIME_BOOST_MID_MORNING,
            transformation_boost: TIME_BOOST_MID_MORNING,
            period: DayPeriod::MidMorning,
        },
        12..=15 => TimeTendency {
            creation_boost: 0,
            transformation_boost: TIME_BOOST_AFTERNOON,
            period: DayPeriod::Afternoon,
        },
        16..=17 => TimeTendency {
            creation_boost: 0,
            transformation_boost: TIME_BOOST_LATE_AFTERNOON,
            period: DayPeriod::LateAfternoon,
        },
        _ => TimeTendency {
            creation_boost: 0,
            transformation_boost: 0,
            period: DayPeriod::Evening,
        },
    }
}

/// Decide mode and confidence from the weighted totals.
/// Exact tie means Mixed at exactly 0.5.
fn decide(creation_total: u32, transformation_total: u32) -> (Mode, f64) {
    let denominator = (creation_total + transformation_total + 1) as f64;
    if creation_total > transformation_total {
        (
            Mode::Creation,
            (creation_total as f64 / denominator).min(1.0),
        )
    } else if transformation_total > creation_total {
        (
            Mode::Transformation,
            (transformation_total as f64 / denominator).min(1.0),
        )
    } else {
        (Mode::Mixed, MIXED_CONFIDENCE)
    }
}

// =============================================================================
// TESTS
// =============================================================================
