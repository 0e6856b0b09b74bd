//! Per-message style signal extraction.
//!
//! Everything here is a pure function of one message. Tokens shorter than
//! two characters are dropped for lexicon matching; pronoun counting and
//! context windows run over the unfiltered token stream so that "i" and
//! other short forms still register. Multi-word entries ("can't wait",
//! "thank you") are matched as substrings of the lowercased message since
//! they can never appear as single tokens.

use std::collections::HashSet;

use renexus_types::style::{
    EmotionSignals, FormalitySignals, HumorSignals, MessageStyle, PersonalReferences,
    PunctuationProfile, QuestionProfile, Topic,
};

use crate::text;

const SOPHISTICATED_WORDS: &[&str] = &[
    "analyze",
    "synthesize",
    "conceptualize",
    "methodology",
    "paradigm",
    "hypothesis",
    "empirical",
    "theoretical",
    "philosophical",
    "psychological",
    "furthermore",
    "consequently",
    "nevertheless",
    "moreover",
    "therefore",
];

const EXCITEMENT_WORDS: &[&str] = &["amazing", "awesome", "incredible", "fantastic", "wow", "omg"];
const ENTHUSIASM_WORDS: &[&str] = &["love", "excited", "thrilled"];
const ENTHUSIASM_PHRASES: &[&str] = &["can't wait", "looking forward"];
const CONCERN_WORDS: &[&str] = &["worried", "concerned", "anxious", "nervous", "unsure", "confused"];
const AFFECTION_WORDS: &[&str] = &["love", "care", "appreciate", "grateful", "thankful", "sweet"];
const FRUSTRATION_WORDS: &[&str] = &[
    "frustrated",
    "annoying",
    "irritating",
    "ugh",
    "seriously",
    "ridiculous",
];

const SARCASM_WORDS: &[&str] = &["obviously", "clearly", "sure", "right", "totally", "absolutely"];
const SARCASM_PHRASES: &[&str] = &["oh great", "just perfect", "how wonderful", "that's just"];

const SELF_DEPRECATING_WORDS: &[&str] = &["stupid", "dumb", "idiot", "fail", "mess", "disaster"];
const FIRST_PERSON_CONTEXT: &[&str] = &["i", "me", "my", "myself"];

const SARCASM_INDICATORS: &[&str] = &[
    "obviously",
    "clearly",
    "sure",
    "right",
    "totally",
    "absolutely",
    "perfect",
    "wonderful",
    "great",
    "fantastic",
    "amazing",
];
const POSITIVE_CONTEXT_WORDS: &[&str] = &["great", "perfect", "wonderful", "amazing", "fantastic"];
/// Negations as they survive tokenization: contraction stems that are
/// unambiguous on their own, plus the plain forms.
const NEGATION_CONTEXT: &[&str] = &["not", "never", "don", "isn", "aren"];

const FORMAL_WORDS: &[&str] = &[
    "please",
    "would",
    "could",
    "should",
    "might",
    "perhaps",
    "possibly",
    "certainly",
    "indeed",
    "furthermore",
    "however",
    "therefore",
    "consequently",
];
const FORMAL_PHRASES: &[&str] = &["thank you"];
const INFORMAL_WORDS: &[&str] = &[
    "gonna", "wanna", "gotta", "yeah", "yep", "nope", "ok", "okay", "cool", "awesome", "dude",
    "guys", "stuff", "things", "kinda", "sorta", "pretty", "really", "super", "totally",
];
const CONTRACTIONS: &[&str] = &[
    "don't", "can't", "won't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't",
    "hadn't",
];

const YES_NO_OPENERS: &[&str] = &[
    "do", "does", "did", "is", "are", "was", "were", "can", "could", "will", "would", "should",
];
const OPEN_ENDED_WORDS: &[&str] = &["what", "how", "why", "when", "where", "who"];
const RHETORICAL_PHRASES: &[&str] = &["right?", "you know?", "don't you think?"];

const WORDPLAY_MARKERS: &[&str] = &["😄", "😂", "🤣", "😆", "lol", "haha"];

const FIRST_PERSON: &[&str] = &["i", "me", "my", "myself", "mine"];
const SECOND_PERSON: &[&str] = &["you", "your", "yours", "yourself"];
const THIRD_PERSON: &[&str] = &["he", "she", "they", "them", "his", "her", "their"];

fn topic_keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Technology => &[
            "computer",
            "software",
            "app",
            "tech",
            "digital",
            "online",
            "internet",
            "ai",
            "programming",
        ],
        Topic::Work => &[
            "job", "work", "career", "office", "business", "meeting", "project", "deadline",
        ],
        Topic::Relationships => &[
            "friend",
            "family",
            "relationship",
            "dating",
            "marriage",
            "love",
            "partner",
        ],
        Topic::Hobbies => &[
            "music", "movie", "book", "game", "sport", "art", "cooking", "travel",
        ],
        Topic::Health => &[
            "health", "exercise", "diet", "sleep", "stress", "mental", "physical",
        ],
        Topic::Education => &[
            "school", "college", "university", "study", "learn", "class", "degree",
        ],
    }
}

/// Extracts every style signal from one message.
pub fn observe(message: &str) -> MessageStyle {
    let lowered = message.to_lowercase();
    let words = text::tokenize(message, 1);
    let all_tokens = text::tokenize(message, 0);
    let sentences = text::sentences(message);

    MessageStyle {
        vocabulary_complexity: vocabulary_complexity(&words),
        unique_word_ratio: unique_word_ratio(&words),
        avg_sentence_length: avg_sentence_length(&sentences),
        sentence_variety: sentence_variety(&sentences),
        emotions: emotion_signals(message, &lowered, &words),
        punctuation: punctuation_profile(message),
        humor: humor_signals(&lowered, &words, &all_tokens),
        sarcasm_likelihood: sarcasm_likelihood(message, &words),
        formality: formality_signals(message, &lowered, &words),
        questions: question_profile(message, sentences.len()),
        topics: detect_topics(&words),
        references: personal_references(&all_tokens),
    }
}

/// Word length, long-word share and sophisticated vocabulary combined into
/// one 0..=1 score. Neutral (0.5) when the message has no usable tokens.
fn vocabulary_complexity(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.5;
    }
    let word_count = words.len() as f64;
    let avg_word_length =
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count;
    let long_ratio = words.iter().filter(|w| w.chars().count() > 6).count() as f64 / word_count;
    let sophisticated_ratio = text::count_matches(words, SOPHISTICATED_WORDS) as f64 / word_count;

    let score = (avg_word_length - 3.0) / 7.0 * 0.4 + long_ratio * 0.4 + sophisticated_ratio * 10.0 * 0.2;
    score.clamp(0.0, 1.0)
}

fn unique_word_ratio(words: &[String]) -> f64 {
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    unique.len() as f64 / words.len().max(1) as f64
}

fn avg_sentence_length(sentences: &[&str]) -> f64 {
    let total: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    total as f64 / sentences.len().max(1) as f64
}

/// Coefficient of variation of per-sentence word counts, capped at 1.
fn sentence_variety(sentences: &[&str]) -> f64 {
    if sentences.len() < 2 {
        return 0.5;
    }
    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    (variance.sqrt() / mean).min(1.0)
}

fn emotion_signals(message: &str, lowered: &str, words: &[String]) -> EmotionSignals {
    let word_count = words.len().max(1) as f64;
    let char_count = message.chars().count().max(1) as f64;

    let exclamations = message.matches('!').count() as f64;
    let excitement = text::count_matches(words, EXCITEMENT_WORDS) as f64 / word_count
        + exclamations / char_count * 10.0;

    let mut enthusiasm_hits = text::count_matches(words, ENTHUSIASM_WORDS);
    for phrase in ENTHUSIASM_PHRASES {
        enthusiasm_hits += lowered.matches(phrase).count();
    }

    EmotionSignals {
        excitement,
        enthusiasm: enthusiasm_hits as f64 / word_count,
        concern: text::count_matches(words, CONCERN_WORDS) as f64 / word_count,
        affection: text::count_matches(words, AFFECTION_WORDS) as f64 / word_count,
        frustration: text::count_matches(words, FRUSTRATION_WORDS) as f64 / word_count,
    }
}

fn punctuation_profile(message: &str) -> PunctuationProfile {
    PunctuationProfile {
        exclamation_marks: message.matches('!').count() as u32,
        question_marks: message.matches('?').count() as u32,
        ellipses: message.matches("...").count() as u32,
        dashes: (message.matches("--").count() + message.matches('—').count()) as u32,
        parentheses: message.matches('(').count() as u32,
        quotation_marks: (message.matches('"').count() + message.matches('\'').count()) as u32,
    }
}

fn humor_signals(lowered: &str, words: &[String], all_tokens: &[String]) -> HumorSignals {
    let word_count = words.len().max(1) as f64;

    let mut sarcastic = text::count_matches(words, SARCASM_WORDS) as f64 / word_count;
    for phrase in SARCASM_PHRASES {
        if lowered.contains(phrase) {
            sarcastic += 0.1;
        }
    }

    // Deprecating words only count when a first-person form sits within
    // three tokens of them.
    let mut self_deprecating = 0.0;
    for (i, word) in all_tokens.iter().enumerate() {
        if SELF_DEPRECATING_WORDS.contains(&word.as_str()) {
            let start = i.saturating_sub(3);
            let end = (i + 4).min(all_tokens.len());
            if all_tokens[start..end]
                .iter()
                .any(|w| FIRST_PERSON_CONTEXT.contains(&w.as_str()))
            {
                self_deprecating += 0.1;
            }
        }
    }

    let wordplay = if WORDPLAY_MARKERS.iter().any(|m| lowered.contains(m)) {
        0.1
    } else {
        0.0
    };

    HumorSignals {
        sarcastic,
        self_deprecating,
        wordplay,
    }
}

fn sarcasm_likelihood(message: &str, words: &[String]) -> f64 {
    let word_count = words.len().max(1) as f64;
    let mut score = text::count_matches(words, SARCASM_INDICATORS) as f64 / word_count;

    // A positive word within two tokens of a negation reads as sarcasm.
    for (i, word) in words.iter().enumerate() {
        if POSITIVE_CONTEXT_WORDS.contains(&word.as_str()) {
            let start = i.saturating_sub(2);
            let end = (i + 3).min(words.len());
            if words[start..end]
                .iter()
                .any(|w| NEGATION_CONTEXT.contains(&w.as_str()))
            {
                score += 0.2;
            }
        }
    }

    if message.matches('!').count() > 2 || message.contains("...") {
        score += 0.1;
    }

    score.min(1.0)
}

fn formality_signals(message: &str, lowered: &str, words: &[String]) -> FormalitySignals {
    let word_count = words.len().max(1) as f64;

    let mut formal = text::count_matches(words, FORMAL_WORDS);
    for phrase in FORMAL_PHRASES {
        formal += lowered.matches(phrase).count();
    }
    let informal = text::count_matches(words, INFORMAL_WORDS);
    let contractions: usize = CONTRACTIONS
        .iter()
        .map(|c| lowered.matches(c).count())
        .sum();

    FormalitySignals {
        formal_words: formal as f64 / word_count,
        informal_words: informal as f64 / word_count,
        contractions: contractions as f64 / word_count,
        proper_capitalization: message.chars().next().is_some_and(char::is_uppercase),
    }
}

fn question_profile(message: &str, sentence_count: usize) -> QuestionProfile {
    let questions: Vec<String> = message
        .split(['.', '!'])
        .map(str::trim)
        .filter(|s| s.contains('?'))
        .map(str::to_lowercase)
        .collect();

    let mut yes_no = 0;
    let mut open_ended = 0;
    let mut rhetorical = 0;
    for question in &questions {
        let opener = question
            .split_whitespace()
            .next()
            .map(|w| w.trim_end_matches('?'))
            .unwrap_or("");
        if YES_NO_OPENERS.contains(&opener) {
            yes_no += 1;
        } else if text::tokenize(question, 0)
            .iter()
            .any(|w| OPEN_ENDED_WORDS.contains(&w.as_str()))
        {
            open_ended += 1;
        } else if RHETORICAL_PHRASES.iter().any(|p| question.contains(p)) {
            rhetorical += 1;
        }
    }

    QuestionProfile {
        total: questions.len() as u32,
        yes_no,
        open_ended,
        rhetorical,
        ratio: questions.len() as f64 / sentence_count.max(1) as f64,
    }
}

fn detect_topics(words: &[String]) -> Vec<Topic> {
    Topic::ALL
        .into_iter()
        .filter(|topic| {
            topic_keywords(*topic)
                .iter()
                .any(|k| words.iter().any(|w| w == k))
        })
        .collect()
}

fn personal_references(all_tokens: &[String]) -> PersonalReferences {
    PersonalReferences {
        first_person: text::count_matches(all_tokens, FIRST_PERSON) as u32,
        second_person: text::count_matches(all_tokens, SECOND_PERSON) as u32,
        third_person: text::count_matches(all_tokens, THIRD_PERSON) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_vocabulary_simple_text_scores_low() {
        let style = observe("ok");
        assert!(close(style.vocabulary_complexity, 0.0));
    }

    #[test]
    fn test_vocabulary_sophisticated_text_saturates() {
        let style = observe("furthermore we should conceptualize the methodology");
        assert!(close(style.vocabulary_complexity, 1.0));
    }

    #[test]
    fn test_unique_word_ratio_counts_repeats() {
        let style = observe("yeah yeah yeah");
        assert!(close(style.unique_word_ratio, 1.0 / 3.0));
    }

    #[test]
    fn test_sentence_variety_from_mixed_lengths() {
        let style = observe("Hi. This is a much longer sentence here.");
        assert!(close(style.sentence_variety, 0.75));
        assert!(close(style.avg_sentence_length, 4.0));
    }

    #[test]
    fn test_single_sentence_variety_is_neutral() {
        let style = observe("Just one sentence");
        assert!(close(style.sentence_variety, 0.5));
    }

    #[test]
    fn test_excitement_from_lexicon() {
        let style = observe("awesome amazing");
        assert!(close(style.emotions.excitement, 1.0));
    }

    #[test]
    fn test_enthusiasm_counts_phrases() {
        let style = observe("can't wait to see you");
        assert!(close(style.emotions.enthusiasm, 0.2));
    }

    #[test]
    fn test_punctuation_counts() {
        let style = observe("Wait... what?! (really) -- \"yes\"");
        assert_eq!(style.punctuation.ellipses, 1);
        assert_eq!(style.punctuation.question_marks, 1);
        assert_eq!(style.punctuation.exclamation_marks, 1);
        assert_eq!(style.punctuation.parentheses, 1);
        assert_eq!(style.punctuation.dashes, 1);
        assert_eq!(style.punctuation.quotation_marks, 2);
    }

    #[test]
    fn test_sarcastic_humor_from_words_and_phrases() {
        let style = observe("obviously sure totally");
        assert!(close(style.humor.sarcastic, 1.0));

        let style = observe("oh great, just perfect");
        assert!(close(style.humor.sarcastic, 0.2));
    }

    #[test]
    fn test_self_deprecating_needs_first_person_context() {
        let style = observe("I made a mess");
        assert!(close(style.humor.self_deprecating, 0.1));

        let style = observe("that room is a mess");
        assert!(close(style.humor.self_deprecating, 0.0));
    }

    #[test]
    fn test_wordplay_markers() {
        assert!(close(observe("haha that was funny").humor.wordplay, 0.1));
        assert!(close(observe("that was funny").humor.wordplay, 0.0));
    }

    #[test]
    fn test_sarcasm_from_negated_positive() {
        let style = observe("this is not great");
        // One indicator hit out of four tokens plus the negated positive.
        assert!(close(style.sarcasm_likelihood, 0.25 + 0.2));
    }

    #[test]
    fn test_sarcasm_from_trailing_ellipsis() {
        let style = observe("hmm...");
        assert!(close(style.sarcasm_likelihood, 0.1));
    }

    #[test]
    fn test_formality_signals() {
        let style = observe("Would you please consider this, perhaps?");
        assert!(close(style.formality.formal_words, 0.5));
        assert!(close(style.formality.informal_words, 0.0));
        assert!(style.formality.proper_capitalization);

        let style = observe("yeah that stuff is pretty cool dude");
        assert!(close(style.formality.informal_words, 5.0 / 7.0));
        assert!(!style.formality.proper_capitalization);
    }

    #[test]
    fn test_contractions_counted_from_raw_text() {
        let style = observe("I don't think it isn't working");
        assert!(close(style.formality.contractions, 2.0 / 5.0));
    }

    #[test]
    fn test_question_classification() {
        let style = observe("Do you like pizza? Sure. What should we eat? Fine. That's good, right?");
        assert_eq!(style.questions.total, 3);
        assert_eq!(style.questions.yes_no, 1);
        assert_eq!(style.questions.open_ended, 1);
        assert_eq!(style.questions.rhetorical, 1);
        assert!(close(style.questions.ratio, 3.0 / 5.0));
    }

    #[test]
    fn test_topic_detection_order() {
        let style = observe("My job interview is about programming");
        assert_eq!(style.topics, vec![Topic::Technology, Topic::Work]);
    }

    #[test]
    fn test_personal_references_count_short_pronouns() {
        let style = observe("I told you they heard me");
        assert_eq!(style.references.first_person, 2);
        assert_eq!(style.references.second_person, 1);
        assert_eq!(style.references.third_person, 1);
    }
}
