//! EMA-based learning of a user's communication style.

use std::collections::VecDeque;

use renexus_types::companion::HumorStyle;
use renexus_types::style::{
    HumorSignals, MessageStyle, StyleProfile, StyleSummary, StyleTrend,
};

use crate::style::analysis;

/// Messages analyzed before confidence saturates at 1.
const CONFIDENCE_SATURATION: f64 = 20.0;

/// Formality observations kept for trend detection.
const TREND_WINDOW: usize = 5;

/// Drift beyond this margin counts as a trend.
const TREND_MARGIN: f64 = 0.1;

/// Mean sentence length (in words) that maps to a 1.0 length preference.
const SENTENCE_LENGTH_CEILING: f64 = 20.0;

/// Accumulated signal a humor register needs before it is called dominant.
const HUMOR_SIGNAL_FLOOR: f64 = 0.05;

const CASUAL_REWRITES: &[(&str, &str)] = &[
    ("I would", "I'd"),
    ("cannot", "can't"),
    ("do not", "don't"),
];

const SIMPLIFICATIONS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("facilitate", "help"),
    ("demonstrate", "show"),
    ("approximately", "about"),
    ("subsequently", "then"),
];

/// Observes messages and folds their style signals into a [`StyleProfile`]
/// with an exponential moving average.
///
/// The profile half persists across sessions (it is stored per companion);
/// the trend window and humor accumulators are session-local.
#[derive(Debug, Clone)]
pub struct StyleLearner {
    profile: StyleProfile,
    alpha: f64,
    humor_signals: HumorSignals,
    recent_formality: VecDeque<f64>,
}

impl StyleLearner {
    pub fn new(alpha: f64) -> Self {
        Self::with_profile(StyleProfile::default(), alpha)
    }

    /// Resumes learning from a previously stored profile.
    pub fn with_profile(profile: StyleProfile, alpha: f64) -> Self {
        Self {
            profile,
            alpha,
            humor_signals: HumorSignals::default(),
            recent_formality: VecDeque::with_capacity(TREND_WINDOW),
        }
    }

    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Analyzes one message, folds it into the profile and returns the raw
    /// observation.
    pub fn observe(&mut self, message: &str) -> MessageStyle {
        let style = analysis::observe(message);
        self.fold(&style);
        style
    }

    fn fold(&mut self, style: &MessageStyle) {
        let alpha = self.alpha;
        let ema = |current: f64, observed: f64| (1.0 - alpha) * current + alpha * observed;

        self.profile.vocabulary_level =
            ema(self.profile.vocabulary_level, style.vocabulary_complexity);
        self.profile.sentence_length = ema(
            self.profile.sentence_length,
            (style.avg_sentence_length / SENTENCE_LENGTH_CEILING).min(1.0),
        );
        self.profile.expressiveness =
            ema(self.profile.expressiveness, style.emotions.total().min(1.0));
        self.profile.question_frequency = ema(
            self.profile.question_frequency,
            style.questions.ratio.min(1.0),
        );

        // Formality only moves when the message carries formality markers
        // either way; a marker-free message says nothing about it.
        let formal = style.formality.formal_words;
        let informal = style.formality.informal_words;
        if formal + informal > 0.0 {
            let ratio = formal / (formal + informal);
            self.profile.formality = ema(self.profile.formality, ratio);
            self.recent_formality.push_back(ratio);
            if self.recent_formality.len() > TREND_WINDOW {
                self.recent_formality.pop_front();
            }
        }

        for topic in &style.topics {
            if !self.profile.topic_interests.contains(topic) {
                self.profile.topic_interests.push(*topic);
            }
        }

        self.humor_signals.sarcastic = ema(self.humor_signals.sarcastic, style.humor.sarcastic);
        self.humor_signals.self_deprecating = ema(
            self.humor_signals.self_deprecating,
            style.humor.self_deprecating,
        );
        self.humor_signals.wordplay = ema(self.humor_signals.wordplay, style.humor.wordplay);
        if let Some(dominant) = self.dominant_humor() {
            self.profile.humor_style = dominant;
        }

        self.profile.messages_analyzed += 1;
    }

    /// The register with the strongest accumulated signal, once any clears
    /// the floor. A known style is never downgraded back to unknown.
    fn dominant_humor(&self) -> Option<HumorStyle> {
        [
            (self.humor_signals.sarcastic, HumorStyle::Sarcastic),
            (self.humor_signals.self_deprecating, HumorStyle::SelfDeprecating),
            (self.humor_signals.wordplay, HumorStyle::Wordplay),
        ]
        .into_iter()
        .filter(|(score, _)| *score > HUMOR_SIGNAL_FLOOR)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, style)| style)
    }

    pub fn summary(&self) -> StyleSummary {
        StyleSummary {
            profile: self.profile.clone(),
            confidence: (self.profile.messages_analyzed as f64 / CONFIDENCE_SATURATION).min(1.0),
            formality_trend: self.formality_trend(),
        }
    }

    fn formality_trend(&self) -> StyleTrend {
        if self.recent_formality.len() < TREND_WINDOW {
            return StyleTrend::InsufficientData;
        }
        let recent: f64 =
            self.recent_formality.iter().sum::<f64>() / self.recent_formality.len() as f64;
        if recent > self.profile.formality + TREND_MARGIN {
            StyleTrend::Increasing
        } else if recent < self.profile.formality - TREND_MARGIN {
            StyleTrend::Decreasing
        } else {
            StyleTrend::Stable
        }
    }

    /// Rewrites a reply to match the learned style: casual contractions for
    /// informal users, a trailing exclamation for expressive ones, plainer
    /// words for plain vocabularies.
    pub fn adapt(&self, reply: &str) -> String {
        let mut adapted = reply.to_string();

        if self.profile.formality < 0.3 {
            for (formal, casual) in CASUAL_REWRITES {
                adapted = adapted.replace(formal, casual);
            }
        }

        if self.profile.expressiveness > 0.7 && !adapted.ends_with('!') {
            if adapted.ends_with('.') {
                adapted.pop();
            }
            adapted.push('!');
        }

        if self.profile.vocabulary_level < 0.3 {
            for (complex, simple) in SIMPLIFICATIONS {
                adapted = adapted.replace(complex, simple);
            }
        }

        adapted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renexus_types::style::{FormalitySignals, Topic};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn style_with_formality(formal: f64, informal: f64) -> MessageStyle {
        MessageStyle {
            formality: FormalitySignals {
                formal_words: formal,
                informal_words: informal,
                contractions: 0.0,
                proper_capitalization: true,
            },
            ..MessageStyle::default()
        }
    }

    #[test]
    fn test_fold_moves_levels_by_ema() {
        let mut learner = StyleLearner::new(0.1);
        let style = MessageStyle {
            vocabulary_complexity: 1.0,
            avg_sentence_length: 20.0,
            ..MessageStyle::default()
        };
        learner.fold(&style);
        assert!(close(learner.profile().vocabulary_level, 0.55));
        assert!(close(learner.profile().sentence_length, 0.55));
        // No formality markers either way, so the level holds.
        assert!(close(learner.profile().formality, 0.5));
        assert_eq!(learner.profile().messages_analyzed, 1);
    }

    #[test]
    fn test_confidence_saturates_at_twenty_messages() {
        let mut learner = StyleLearner::new(0.1);
        for _ in 0..10 {
            learner.fold(&MessageStyle::default());
        }
        assert!(close(learner.summary().confidence, 0.5));
        for _ in 0..30 {
            learner.fold(&MessageStyle::default());
        }
        assert!(close(learner.summary().confidence, 1.0));
    }

    #[test]
    fn test_topics_accumulate_without_duplicates() {
        let mut learner = StyleLearner::new(0.1);
        learner.fold(&MessageStyle {
            topics: vec![Topic::Technology],
            ..MessageStyle::default()
        });
        learner.fold(&MessageStyle {
            topics: vec![Topic::Technology, Topic::Work],
            ..MessageStyle::default()
        });
        assert_eq!(
            learner.profile().topic_interests,
            vec![Topic::Technology, Topic::Work]
        );
    }

    #[test]
    fn test_trend_needs_five_observations() {
        let mut learner = StyleLearner::new(0.1);
        for _ in 0..4 {
            learner.fold(&style_with_formality(1.0, 0.0));
        }
        assert_eq!(learner.summary().formality_trend, StyleTrend::InsufficientData);
    }

    #[test]
    fn test_trend_detects_drift() {
        let mut learner = StyleLearner::new(0.1);
        for _ in 0..5 {
            learner.fold(&style_with_formality(1.0, 0.0));
        }
        assert_eq!(learner.summary().formality_trend, StyleTrend::Increasing);

        let mut learner = StyleLearner::new(0.1);
        for _ in 0..5 {
            learner.fold(&style_with_formality(0.0, 1.0));
        }
        assert_eq!(learner.summary().formality_trend, StyleTrend::Decreasing);
    }

    #[test]
    fn test_humor_dominance_is_sticky() {
        let mut learner = StyleLearner::new(0.1);
        learner.fold(&MessageStyle {
            humor: HumorSignals {
                sarcastic: 1.0,
                self_deprecating: 0.0,
                wordplay: 0.0,
            },
            ..MessageStyle::default()
        });
        assert_eq!(learner.profile().humor_style, HumorStyle::Sarcastic);

        // Plenty of humorless messages later the call still stands.
        for _ in 0..30 {
            learner.fold(&MessageStyle::default());
        }
        assert_eq!(learner.profile().humor_style, HumorStyle::Sarcastic);
    }

    #[test]
    fn test_unknown_until_signal_clears_floor() {
        let mut learner = StyleLearner::new(0.1);
        learner.fold(&MessageStyle {
            humor: HumorSignals {
                sarcastic: 0.1,
                self_deprecating: 0.0,
                wordplay: 0.0,
            },
            ..MessageStyle::default()
        });
        // One weak observation folds to 0.01, below the floor.
        assert_eq!(learner.profile().humor_style, HumorStyle::Unknown);
    }

    #[test]
    fn test_adapt_casualizes_for_informal_users() {
        let mut profile = StyleProfile::default();
        profile.formality = 0.1;
        let learner = StyleLearner::with_profile(profile, 0.1);
        assert_eq!(
            learner.adapt("I would say that I cannot go"),
            "I'd say that I can't go"
        );
    }

    #[test]
    fn test_adapt_appends_exclamation_for_expressive_users() {
        let mut profile = StyleProfile::default();
        profile.expressiveness = 0.9;
        let learner = StyleLearner::with_profile(profile, 0.1);
        assert_eq!(learner.adapt("Sounds good."), "Sounds good!");
        assert_eq!(learner.adapt("Wow!"), "Wow!");
    }

    #[test]
    fn test_adapt_simplifies_for_plain_vocabularies() {
        let mut profile = StyleProfile::default();
        profile.vocabulary_level = 0.1;
        let learner = StyleLearner::with_profile(profile, 0.1);
        assert_eq!(
            learner.adapt("We can utilize this to facilitate progress"),
            "We can use this to help progress"
        );
    }

    #[test]
    fn test_adapt_leaves_neutral_profiles_alone() {
        let learner = StyleLearner::new(0.1);
        let reply = "I would demonstrate this carefully.";
        assert_eq!(learner.adapt(reply), reply);
    }

    #[test]
    fn test_with_profile_resumes_confidence() {
        let mut profile = StyleProfile::default();
        profile.messages_analyzed = 12;
        let learner = StyleLearner::with_profile(profile, 0.1);
        let summary = learner.summary();
        assert!(close(summary.confidence, 0.6));
        assert_eq!(summary.formality_trend, StyleTrend::InsufficientData);
    }

    #[test]
    fn test_observe_returns_the_raw_observation() {
        let mut learner = StyleLearner::new(0.1);
        let style = learner.observe("awesome amazing");
        assert!(close(style.emotions.excitement, 1.0));
        assert!(close(learner.profile().expressiveness, 0.55));
        assert_eq!(learner.profile().messages_analyzed, 1);
    }
}
