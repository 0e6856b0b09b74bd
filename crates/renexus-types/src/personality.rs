//! Big Five trait types for Renexus.
//!
//! These types carry the output of lexicon-based text analysis: a trait
//! vector for the five factors plus linguistic features observed in the
//! same text. Scores always live in the closed range 0..=1.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The five personality factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl TraitKind {
    /// All five factors in canonical order.
    pub const ALL: [TraitKind; 5] = [
        TraitKind::Openness,
        TraitKind::Conscientiousness,
        TraitKind::Extraversion,
        TraitKind::Agreeableness,
        TraitKind::Neuroticism,
    ];

    /// Capitalized label for display ("Openness", "Neuroticism", ...).
    pub fn label(&self) -> &'static str {
        match self {
            TraitKind::Openness => "Openness",
            TraitKind::Conscientiousness => "Conscientiousness",
            TraitKind::Extraversion => "Extraversion",
            TraitKind::Agreeableness => "Agreeableness",
            TraitKind::Neuroticism => "Neuroticism",
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraitKind::Openness => write!(f, "openness"),
            TraitKind::Conscientiousness => write!(f, "conscientiousness"),
            TraitKind::Extraversion => write!(f, "extraversion"),
            TraitKind::Agreeableness => write!(f, "agreeableness"),
            TraitKind::Neuroticism => write!(f, "neuroticism"),
        }
    }
}

impl FromStr for TraitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openness" => Ok(TraitKind::Openness),
            "conscientiousness" => Ok(TraitKind::Conscientiousness),
            "extraversion" => Ok(TraitKind::Extraversion),
            "agreeableness" => Ok(TraitKind::Agreeableness),
            "neuroticism" => Ok(TraitKind::Neuroticism),
            other => Err(format!("invalid trait: '{other}'")),
        }
    }
}

/// A Big Five trait vector. Each score is in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitScores {
    /// The neutral vector: every factor at 0.5.
    pub fn neutral() -> Self {
        Self {
            openness: 0.5,
            conscientiousness: 0.5,
            extraversion: 0.5,
            agreeableness: 0.5,
            neuroticism: 0.5,
        }
    }

    pub fn get(&self, kind: TraitKind) -> f64 {
        match kind {
            TraitKind::Openness => self.openness,
            TraitKind::Conscientiousness => self.conscientiousness,
            TraitKind::Extraversion => self.extraversion,
            TraitKind::Agreeableness => self.agreeableness,
            TraitKind::Neuroticism => self.neuroticism,
        }
    }

    pub fn set(&mut self, kind: TraitKind, score: f64) {
        let score = score.clamp(0.0, 1.0);
        match kind {
            TraitKind::Openness => self.openness = score,
            TraitKind::Conscientiousness => self.conscientiousness = score,
            TraitKind::Extraversion => self.extraversion = score,
            TraitKind::Agreeableness => self.agreeableness = score,
            TraitKind::Neuroticism => self.neuroticism = score,
        }
    }
}

impl Default for TraitScores {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Coarse level a trait score falls into.
///
/// Boundaries: above 0.7 is high, below 0.3 is low, everything else
/// is moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitLevel {
    High,
    Moderate,
    Low,
}

impl TraitLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            TraitLevel::High
        } else if score < 0.3 {
            TraitLevel::Low
        } else {
            TraitLevel::Moderate
        }
    }
}

impl fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraitLevel::High => write!(f, "high"),
            TraitLevel::Moderate => write!(f, "moderate"),
            TraitLevel::Low => write!(f, "low"),
        }
    }
}

/// Linguistic features observed alongside the trait vector.
///
/// All values are in 0..=1. Sentiment is the positive/(positive+negative)
/// lexicon ratio, 0.5 when the text carries neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinguisticFeatures {
    /// Normalized mean sentence length.
    pub complexity: f64,
    /// Question-mark density per sentence.
    pub curiosity: f64,
    /// Exclamation density per sentence.
    pub enthusiasm: f64,
    /// First-person token ratio, amplified.
    pub self_focus: f64,
    pub sentiment: f64,
}

impl Default for LinguisticFeatures {
    fn default() -> Self {
        Self {
            complexity: 0.0,
            curiosity: 0.0,
            enthusiasm: 0.0,
            self_focus: 0.0,
            sentiment: 0.5,
        }
    }
}

/// Full result of analyzing one piece of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub traits: TraitScores,
    pub features: LinguisticFeatures,
}
