//! Word lists that correlate with the Big Five factors.
//!
//! Matching is exact and case-insensitive over tokens longer than two
//! characters, so every entry here is at least three characters long.

use renexus_types::personality::TraitKind;

pub const OPENNESS_HIGH: &[&str] = &[
    "creative",
    "imagine",
    "artistic",
    "innovative",
    "original",
    "abstract",
    "theoretical",
    "philosophical",
    "metaphor",
    "possibility",
    "potential",
    "explore",
    "discover",
    "wonder",
    "curious",
    "fascinating",
    "intriguing",
    "complex",
    "analyze",
    "understand",
    "learn",
    "study",
    "research",
    "adventure",
    "travel",
    "culture",
    "different",
    "unique",
    "experiment",
    "try",
    "experience",
    "new",
    "novel",
];

pub const OPENNESS_LOW: &[&str] = &[
    "traditional",
    "conventional",
    "normal",
    "standard",
    "typical",
    "practical",
    "realistic",
    "concrete",
    "simple",
    "basic",
    "always",
    "never",
    "same",
    "routine",
    "habit",
    "usual",
    "predictable",
    "stable",
    "consistent",
    "reliable",
];

pub const CONSCIENTIOUSNESS_HIGH: &[&str] = &[
    "organize",
    "plan",
    "schedule",
    "prepare",
    "arrange",
    "systematic",
    "methodical",
    "structured",
    "ordered",
    "goal",
    "achieve",
    "accomplish",
    "complete",
    "finish",
    "success",
    "work",
    "effort",
    "discipline",
    "focus",
    "responsible",
    "duty",
    "obligation",
    "commitment",
    "promise",
    "reliable",
    "dependable",
    "punctual",
    "thorough",
];

pub const CONSCIENTIOUSNESS_LOW: &[&str] = &[
    "messy",
    "chaotic",
    "disorganized",
    "scattered",
    "random",
    "spontaneous",
    "impulsive",
    "careless",
    "lazy",
    "later",
    "tomorrow",
    "eventually",
    "postpone",
    "delay",
    "forget",
    "ignore",
    "skip",
    "avoid",
    "procrastinate",
];

pub const EXTRAVERSION_HIGH: &[&str] = &[
    "people",
    "friends",
    "party",
    "social",
    "group",
    "team",
    "together",
    "meet",
    "talk",
    "chat",
    "conversation",
    "excited",
    "energetic",
    "enthusiastic",
    "confident",
    "bold",
    "outgoing",
    "talkative",
    "loud",
    "active",
    "lively",
    "lead",
    "direct",
    "manage",
    "control",
    "influence",
    "persuade",
];

pub const EXTRAVERSION_LOW: &[&str] = &[
    "quiet",
    "alone",
    "solitude",
    "private",
    "reserved",
    "shy",
    "introverted",
    "withdrawn",
    "isolated",
    "independent",
    "few",
    "small",
    "intimate",
    "close",
    "personal",
    "individual",
    "think",
    "reflect",
    "consider",
    "ponder",
    "contemplate",
];

pub const AGREEABLENESS_HIGH: &[&str] = &[
    "help",
    "support",
    "care",
    "kind",
    "compassionate",
    "empathy",
    "understanding",
    "sympathetic",
    "considerate",
    "thoughtful",
    "trust",
    "believe",
    "faith",
    "harmony",
    "peace",
    "cooperation",
    "agree",
    "compromise",
    "collaborate",
    "share",
    "give",
    "love",
    "like",
    "appreciate",
    "respect",
    "admire",
    "value",
];

pub const AGREEABLENESS_LOW: &[&str] = &[
    "compete",
    "win",
    "beat",
    "defeat",
    "superior",
    "better",
    "skeptical",
    "doubt",
    "suspicious",
    "distrust",
    "question",
    "myself",
    "selfish",
    "independent",
    "wrong",
    "stupid",
    "annoying",
    "irritating",
    "hate",
    "dislike",
];

pub const NEUROTICISM_HIGH: &[&str] = &[
    "anxious",
    "worried",
    "nervous",
    "stress",
    "tension",
    "fear",
    "panic",
    "overwhelmed",
    "pressure",
    "burden",
    "struggle",
    "sad",
    "depressed",
    "upset",
    "angry",
    "frustrated",
    "irritated",
    "disappointed",
    "hurt",
    "pain",
    "suffering",
    "miserable",
    "emotional",
    "sensitive",
    "moody",
    "unstable",
    "volatile",
    "dramatic",
    "intense",
    "extreme",
    "overreact",
];

pub const NEUROTICISM_LOW: &[&str] = &[
    "calm",
    "relaxed",
    "peaceful",
    "stable",
    "steady",
    "balanced",
    "composed",
    "controlled",
    "even",
    "consistent",
    "secure",
    "happy",
    "content",
    "satisfied",
    "pleased",
    "comfortable",
    "confident",
    "optimistic",
    "positive",
    "cheerful",
    "joyful",
    "cope",
    "handle",
    "manage",
    "deal",
    "overcome",
    "resilient",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "awesome",
    "amazing",
    "wonderful",
    "excellent",
    "fantastic",
    "love",
    "like",
    "enjoy",
    "happy",
    "pleased",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "angry",
    "sad",
    "upset",
    "frustrated",
    "annoyed",
];

pub const FIRST_PERSON: &[&str] = &["i", "me", "my", "myself", "mine"];

/// High and low indicator lists for one factor.
pub fn indicators(kind: TraitKind) -> (&'static [&'static str], &'static [&'static str]) {
    match kind {
        TraitKind::Openness => (OPENNESS_HIGH, OPENNESS_LOW),
        TraitKind::Conscientiousness => (CONSCIENTIOUSNESS_HIGH, CONSCIENTIOUSNESS_LOW),
        TraitKind::Extraversion => (EXTRAVERSION_HIGH, EXTRAVERSION_LOW),
        TraitKind::Agreeableness => (AGREEABLENESS_HIGH, AGREEABLENESS_LOW),
        TraitKind::Neuroticism => (NEUROTICISM_HIGH, NEUROTICISM_LOW),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_survives_the_token_filter() {
        for kind in TraitKind::ALL {
            let (high, low) = indicators(kind);
            for word in high.iter().chain(low.iter()) {
                assert!(word.chars().count() > 2, "dead lexicon entry: {word}");
            }
        }
        for word in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS.iter()) {
            assert!(word.chars().count() > 2, "dead sentiment entry: {word}");
        }
    }

    #[test]
    fn entries_are_lowercase() {
        for kind in TraitKind::ALL {
            let (high, low) = indicators(kind);
            for word in high.iter().chain(low.iter()) {
                assert_eq!(*word, word.to_lowercase(), "non-lowercase entry: {word}");
            }
        }
    }
}
