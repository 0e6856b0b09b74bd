//! Lexicon-based Big Five analysis.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::TraitAnalyzer;
