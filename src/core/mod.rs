//! Core modules for Conlin

pub mod calculator;
pub mod classifier;

pub use calculator::{
    lookup_factor, Calculator, ATTENTION_FACTORS, PATTERN_STRENGTHS, REALITY_FACTORS,
};
pub use classifier::ModeClassifier;
