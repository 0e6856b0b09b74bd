//! Communication-style types for Renexus.
//!
//! `MessageStyle` is the observation extracted from a single user message;
//! `StyleProfile` is the long-lived pattern state the learner folds those
//! observations into with an exponential moving average.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::companion::HumorStyle;

/// Style indicators observed in one message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageStyle {
    /// 0 = simple vocabulary, 1 = complex.
    pub vocabulary_complexity: f64,
    pub unique_word_ratio: f64,
    /// Mean words per sentence (unnormalized).
    pub avg_sentence_length: f64,
    /// Coefficient of variation of sentence lengths, capped at 1.
    pub sentence_variety: f64,
    pub emotions: EmotionSignals,
    pub punctuation: PunctuationProfile,
    pub humor: HumorSignals,
    pub sarcasm_likelihood: f64,
    pub formality: FormalitySignals,
    pub questions: QuestionProfile,
    pub topics: Vec<Topic>,
    pub references: PersonalReferences,
}

/// Emotion-family signals, each a lexicon hit ratio.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmotionSignals {
    pub excitement: f64,
    pub enthusiasm: f64,
    pub concern: f64,
    pub affection: f64,
    pub frustration: f64,
}

impl EmotionSignals {
    /// Combined emotional load of the message.
    pub fn total(&self) -> f64 {
        self.excitement + self.enthusiasm + self.concern + self.affection + self.frustration
    }
}

/// Raw punctuation counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PunctuationProfile {
    pub exclamation_marks: u32,
    pub question_marks: u32,
    pub ellipses: u32,
    pub dashes: u32,
    pub parentheses: u32,
    pub quotation_marks: u32,
}

/// Humor-register signals detected in one message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HumorSignals {
    pub sarcastic: f64,
    /// Deprecating words within a first-person context window.
    pub self_deprecating: f64,
    pub wordplay: f64,
}

/// Formality indicators as lexicon hit ratios.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FormalitySignals {
    pub formal_words: f64,
    pub informal_words: f64,
    pub contractions: f64,
    pub proper_capitalization: bool,
}

/// Question usage in one message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QuestionProfile {
    pub total: u32,
    pub yes_no: u32,
    pub open_ended: u32,
    pub rhetorical: u32,
    /// Questions per sentence.
    pub ratio: f64,
}

/// Personal-pronoun counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PersonalReferences {
    pub first_person: u32,
    pub second_person: u32,
    pub third_person: u32,
}

/// Topic families tracked as interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Technology,
    Work,
    Relationships,
    Hobbies,
    Health,
    Education,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Technology,
        Topic::Work,
        Topic::Relationships,
        Topic::Hobbies,
        Topic::Health,
        Topic::Education,
    ];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Technology => write!(f, "technology"),
            Topic::Work => write!(f, "work"),
            Topic::Relationships => write!(f, "relationships"),
            Topic::Hobbies => write!(f, "hobbies"),
            Topic::Health => write!(f, "health"),
            Topic::Education => write!(f, "education"),
        }
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technology" => Ok(Topic::Technology),
            "work" => Ok(Topic::Work),
            "relationships" => Ok(Topic::Relationships),
            "hobbies" => Ok(Topic::Hobbies),
            "health" => Ok(Topic::Health),
            "education" => Ok(Topic::Education),
            other => Err(format!("invalid topic: '{other}'")),
        }
    }
}

/// Learned communication patterns for one user.
///
/// All levels are in 0..=1 and move by EMA as messages are observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// 0 = simple, 1 = complex.
    pub vocabulary_level: f64,
    /// 0 = short sentences, 1 = long.
    pub sentence_length: f64,
    /// 0 = reserved, 1 = expressive.
    pub expressiveness: f64,
    /// 0 = casual, 1 = formal.
    pub formality: f64,
    pub question_frequency: f64,
    /// Dominant humor register once enough signal accumulates.
    pub humor_style: HumorStyle,
    /// Topics mentioned so far, in first-seen order.
    pub topic_interests: Vec<Topic>,
    pub messages_analyzed: u32,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            vocabulary_level: 0.5,
            sentence_length: 0.5,
            expressiveness: 0.5,
            formality: 0.5,
            question_frequency: 0.5,
            humor_style: HumorStyle::Unknown,
            topic_interests: Vec::new(),
            messages_analyzed: 0,
        }
    }
}

/// Direction the formality of recent messages is drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTrend {
    Increasing,
    Decreasing,
    Stable,
    InsufficientData,
}

impl fmt::Display for StyleTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTrend::Increasing => write!(f, "increasing"),
            StyleTrend::Decreasing => write!(f, "decreasing"),
            StyleTrend::Stable => write!(f, "stable"),
            StyleTrend::InsufficientData => write!(f, "insufficient_data"),
        }
    }
}

/// Snapshot of learned patterns plus how much to trust them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSummary {
    pub profile: StyleProfile,
    /// Grows with messages analyzed, saturating at 20 messages.
    pub confidence: f64,
    pub formality_trend: StyleTrend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_neutral() {
        let profile = StyleProfile::default();
        assert!((profile.vocabulary_level - 0.5).abs() < f64::EPSILON);
        assert!((profile.formality - 0.5).abs() < f64::EPSILON);
        assert_eq!(profile.humor_style, HumorStyle::Unknown);
        assert!(profile.topic_interests.is_empty());
        assert_eq!(profile.messages_analyzed, 0);
    }

    #[test]
    fn test_emotion_total() {
        let emotions = EmotionSignals {
            excitement: 0.1,
            enthusiasm: 0.2,
            concern: 0.0,
            affection: 0.3,
            frustration: 0.0,
        };
        assert!((emotions.total() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_topic_roundtrip() {
        for topic in Topic::ALL {
            let parsed: Topic = topic.to_string().parse().unwrap();
            assert_eq!(topic, parsed);
        }
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let mut profile = StyleProfile::default();
        profile.topic_interests.push(Topic::Technology);
        profile.messages_analyzed = 7;
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: StyleProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
