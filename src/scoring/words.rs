//! English word tables backing the keyword strategy.
//!
//! These are plain data. Swap them out (or pass replacements to
//! `KeywordStrategy::with_words`) without touching the scoring logic.

/// Positive markers for the keyword-ratio strategy, matched as substrings.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "amazing",
    "awesome",
    "beautiful",
    "best",
    "brilliant",
    "enjoyed",
    "excellent",
    "fantastic",
    "fun",
    "good",
    "great",
    "incredible",
    "love",
    "masterpiece",
    "outstanding",
    "perfect",
    "recommend",
    "superb",
    "wonderful",
];

/// Negative markers for the keyword-ratio strategy, matched as substrings.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "annoying",
    "awful",
    "bad",
    "boring",
    "disappointing",
    "dull",
    "hate",
    "horrible",
    "mediocre",
    "mess",
    "pointless",
    "poor",
    "predictable",
    "ridiculous",
    "stupid",
    "terrible",
    "waste",
    "weak",
    "worst",
];
