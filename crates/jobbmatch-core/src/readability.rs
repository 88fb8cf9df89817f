//! Readability scoring using a simplified Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (vowel_runs/words)`
//!
//! Higher score = easier to read. Syllables are approximated by counting
//! maximal runs of vowels, which works for Swedish and English alike without
//! a dictionary. Text with no words or no sentences gets the
//! [`ReadabilityLevel::NoText`] sentinel instead of a division by zero.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Vowels counted as syllable nuclei (lowercase).
const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', 'å', 'ä', 'ö', 'é', 'è', 'ü', 'à', 'á', 'ó', 'í', 'ú',
];

/// Readability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadabilityLevel {
    /// Score 90 and above.
    VeryEasy,
    /// Score 70–90.
    Easy,
    /// Score 50–70.
    Moderate,
    /// Score 30–50.
    Difficult,
    /// Score below 30.
    VeryDifficult,
    /// No words or no sentences to score.
    NoText,
}

impl ReadabilityLevel {
    /// Band a reading-ease score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 70.0 {
            Self::Easy
        } else if score >= 50.0 {
            Self::Moderate
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Returns the level as a human-readable string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::VeryDifficult => "very difficult",
            Self::NoText => "no text",
        }
    }
}

impl std::fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Readability {
    /// Reading-ease score (0.0 for the no-text sentinel).
    pub score: f64,
    /// Band of `score`.
    pub level: ReadabilityLevel,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total vowel runs (syllable estimate).
    pub vowel_runs: usize,
}

impl Readability {
    /// The sentinel returned for text with nothing to score.
    pub const NO_TEXT: Self = Self {
        score: 0.0,
        level: ReadabilityLevel::NoText,
        sentences: 0,
        words: 0,
        vowel_runs: 0,
    };

    /// Returns `true` if this is the no-text sentinel.
    pub fn is_no_text(&self) -> bool {
        self.level == ReadabilityLevel::NoText
    }
}

/// Score the readability of `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str) -> Readability {
    let sentences = count_sentences(text);
    let words = count_words(text);

    if words == 0 || sentences == 0 {
        tracing::debug!("nothing to score");
        return Readability::NO_TEXT;
    }

    let vowel_runs = count_vowel_runs(text);
    let words_per_sentence = words as f64 / sentences as f64;
    let runs_per_word = vowel_runs as f64 / words as f64;
    let score = 1.015f64.mul_add(-words_per_sentence, 84.6f64.mul_add(-runs_per_word, 206.835));

    Readability {
        score,
        level: ReadabilityLevel::from_score(score),
        sentences,
        words,
        vowel_runs,
    }
}

/// Count fragments between `.`, `!` and `?` that contain non-whitespace.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Count words by whitespace splitting.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count maximal runs of vowel characters across the whole text.
fn count_vowel_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        let is_vowel = VOWELS.contains(&ch);
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }
    runs
}
