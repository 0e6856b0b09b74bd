//! Small text-segmentation helpers shared by the personality and style
//! analyzers.

/// Lowercases `text` and splits it into word tokens, keeping only tokens
/// longer than `min_len` characters.
///
/// Token boundaries are any character that is neither alphanumeric nor an
/// underscore, so contractions split at the apostrophe ("can't" becomes
/// "can" and "t"). Lengths are counted in characters, not bytes.
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

/// Splits `text` into sentences on `.`, `!` and `?`, trimming whitespace and
/// dropping empty segments.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Counts how many tokens in `words` appear in `lexicon`.
pub fn count_matches(words: &[String], lexicon: &[&str]) -> usize {
    words.iter().filter(|w| lexicon.contains(&w.as_str())).count()
}
