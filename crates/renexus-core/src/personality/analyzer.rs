//! Text analysis against the Big Five lexicons.

use renexus_types::personality::{
    LinguisticFeatures, TextAnalysis, TraitKind, TraitLevel, TraitScores,
};

use crate::personality::lexicon;
use crate::text;

/// Tokens this short or shorter are ignored when matching indicators.
const TRAIT_TOKEN_MIN_LEN: usize = 2;

/// Sentence length (in words) that maps to maximum complexity.
const COMPLEXITY_CEILING: f64 = 20.0;

/// Amplifier applied to the first-person token ratio.
const SELF_FOCUS_GAIN: f64 = 10.0;

/// Lexicon-based Big Five analyzer.
///
/// Scores each factor as the ratio of high-indicator matches to all
/// indicator matches, neutral (0.5) when a text carries no indicators
/// for that factor at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraitAnalyzer;

impl TraitAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes one piece of text for trait indicators and linguistic
    /// features. Empty or whitespace-only input yields the neutral
    /// analysis, every value at 0.5.
    pub fn analyze(&self, input: &str) -> TextAnalysis {
        let words = text::tokenize(input, TRAIT_TOKEN_MIN_LEN);
        if words.is_empty() {
            return Self::neutral_analysis();
        }

        let mut traits = TraitScores::neutral();
        for kind in TraitKind::ALL {
            let (high, low) = lexicon::indicators(kind);
            let high_matches = text::count_matches(&words, high);
            let low_matches = text::count_matches(&words, low);
            if high_matches + low_matches > 0 {
                traits.set(
                    kind,
                    high_matches as f64 / (high_matches + low_matches) as f64,
                );
            }
        }

        TextAnalysis {
            traits,
            features: Self::linguistic_features(input, &words),
        }
    }

    /// Human-readable one-line summary, factors in canonical order.
    pub fn summary(&self, scores: &TraitScores) -> String {
        TraitKind::ALL
            .iter()
            .map(|kind| {
                let score = scores.get(*kind);
                format!("{}: {} ({:.2})", kind.label(), TraitLevel::from_score(score), score)
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Derives a companion trait vector that balances the user's.
    ///
    /// The companion stays warm regardless of the user (agreeableness
    /// floored at 0.7), stays emotionally steady against a volatile user
    /// (neuroticism capped from below at 0.2), and leans toward openness
    /// when the user is closed off. The remaining factors shift two tenths
    /// toward the middle of wherever the user sits.
    pub fn complementary(&self, user: &TraitScores) -> TraitScores {
        let mut scores = TraitScores::neutral();
        for kind in TraitKind::ALL {
            let user_score = user.get(kind);
            let score = match kind {
                TraitKind::Agreeableness => user_score.max(0.7),
                TraitKind::Neuroticism => (1.0 - user_score * 0.8).max(0.2),
                TraitKind::Openness => {
                    if user_score > 0.7 {
                        0.6
                    } else if user_score < 0.3 {
                        0.8
                    } else {
                        0.7
                    }
                }
                _ => {
                    if user_score > 0.6 {
                        user_score - 0.2
                    } else if user_score < 0.4 {
                        user_score + 0.2
                    } else {
                        user_score
                    }
                }
            };
            scores.set(kind, score);
        }
        scores
    }

    fn neutral_analysis() -> TextAnalysis {
        TextAnalysis {
            traits: TraitScores::neutral(),
            features: LinguisticFeatures {
                complexity: 0.5,
                curiosity: 0.5,
                enthusiasm: 0.5,
                self_focus: 0.5,
                sentiment: 0.5,
            },
        }
    }

    fn linguistic_features(input: &str, words: &[String]) -> LinguisticFeatures {
        let sentences = text::sentences(input);
        let sentence_count = sentences.len().max(1) as f64;

        let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
        let avg_sentence_length = total_words as f64 / sentence_count;
        let complexity = (avg_sentence_length / COMPLEXITY_CEILING).min(1.0);

        let questions = input.matches('?').count() as f64;
        let curiosity = (questions / sentence_count).min(1.0);

        let exclamations = input.matches('!').count() as f64;
        let enthusiasm = (exclamations / sentence_count).min(1.0);

        // Pronouns are short, so self-focus is measured over the unfiltered
        // token stream rather than the indicator tokens.
        let all_tokens = text::tokenize(input, 0);
        let first_person = text::count_matches(&all_tokens, lexicon::FIRST_PERSON);
        let self_focus =
            (first_person as f64 / all_tokens.len().max(1) as f64 * SELF_FOCUS_GAIN).min(1.0);

        let positive = text::count_matches(words, lexicon::POSITIVE_WORDS);
        let negative = text::count_matches(words, lexicon::NEGATIVE_WORDS);
        let sentiment = if positive + negative > 0 {
            positive as f64 / (positive + negative) as f64
        } else {
            0.5
        };

        LinguisticFeatures {
            complexity,
            curiosity,
            enthusiasm,
            self_focus,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_input_is_fully_neutral() {
        let analyzer = TraitAnalyzer::new();
        for input in ["", "   ", "..!?"] {
            let analysis = analyzer.analyze(input);
            for kind in TraitKind::ALL {
                assert!(close(analysis.traits.get(kind), 0.5));
            }
            assert!(close(analysis.features.complexity, 0.5));
            assert!(close(analysis.features.curiosity, 0.5));
            assert!(close(analysis.features.enthusiasm, 0.5));
            assert!(close(analysis.features.self_focus, 0.5));
            assert!(close(analysis.features.sentiment, 0.5));
        }
    }

    #[test]
    fn test_openness_from_high_indicators() {
        let analyzer = TraitAnalyzer::new();
        let analysis = analyzer.analyze("Let's explore and discover something new");
        assert!(close(analysis.traits.openness, 1.0));
        assert!(close(analysis.traits.conscientiousness, 0.5));
        assert!(close(analysis.traits.neuroticism, 0.5));
    }

    #[test]
    fn test_openness_from_low_indicators() {
        let analyzer = TraitAnalyzer::new();
        let analysis =
            analyzer.analyze("I prefer my usual routine, the same standard practical things");
        assert!(close(analysis.traits.openness, 0.0));
    }

    #[test]
    fn test_mixed_indicators_balance_out() {
        let analyzer = TraitAnalyzer::new();
        let analysis = analyzer.analyze("creative routine");
        assert!(close(analysis.traits.openness, 0.5));
    }

    #[test]
    fn test_sentiment_ratio() {
        let analyzer = TraitAnalyzer::new();
        let analysis = analyzer.analyze("This is great and awesome but also terrible");
        assert!(close(analysis.features.sentiment, 2.0 / 3.0));
    }

    #[test]
    fn test_self_focus_counts_short_pronouns() {
        let analyzer = TraitAnalyzer::new();
        let analysis = analyzer.analyze("I love me some myself time");
        assert!(close(analysis.features.self_focus, 1.0));
    }

    #[test]
    fn test_question_density() {
        let analyzer = TraitAnalyzer::new();
        let analysis = analyzer.analyze("What? Why? How?");
        assert!(close(analysis.features.curiosity, 1.0));
        assert!(close(analysis.features.enthusiasm, 0.0));
        assert!(close(analysis.features.complexity, 1.0 / 20.0));
    }

    #[test]
    fn test_summary_format() {
        let analyzer = TraitAnalyzer::new();
        let summary = analyzer.summary(&TraitScores::neutral());
        assert_eq!(
            summary,
            "Openness: moderate (0.50); Conscientiousness: moderate (0.50); \
             Extraversion: moderate (0.50); Agreeableness: moderate (0.50); \
             Neuroticism: moderate (0.50)"
        );
    }

    #[test]
    fn test_complementary_balances_extremes() {
        let analyzer = TraitAnalyzer::new();

        let mut intense = TraitScores::neutral();
        for kind in TraitKind::ALL {
            intense.set(kind, 0.9);
        }
        let companion = analyzer.complementary(&intense);
        assert!(close(companion.agreeableness, 0.9));
        assert!(close(companion.neuroticism, 0.28));
        assert!(close(companion.openness, 0.6));
        assert!(close(companion.conscientiousness, 0.7));
        assert!(close(companion.extraversion, 0.7));

        let mut muted = TraitScores::neutral();
        for kind in TraitKind::ALL {
            muted.set(kind, 0.1);
        }
        let companion = analyzer.complementary(&muted);
        assert!(close(companion.agreeableness, 0.7));
        assert!(close(companion.neuroticism, 0.92));
        assert!(close(companion.openness, 0.8));
        assert!(close(companion.conscientiousness, 0.3));
        assert!(close(companion.extraversion, 0.3));
    }

    #[test]
    fn test_complementary_of_neutral() {
        let analyzer = TraitAnalyzer::new();
        let companion = analyzer.complementary(&TraitScores::neutral());
        assert!(close(companion.agreeableness, 0.7));
        assert!(close(companion.neuroticism, 0.6));
        assert!(close(companion.openness, 0.7));
        assert!(close(companion.conscientiousness, 0.5));
        assert!(close(companion.extraversion, 0.5));
    }
}
