//! Sentiment scoring: text → polarity → sentiment, confidence and star rating
//!
//! The polarity backend is pluggable through [`PolarityStrategy`]. Everything
//! downstream of the polarity scalar lives in [`scorer`] and is shared by all
//! strategies, except the confidence thresholds which each strategy supplies.

pub mod keyword;
pub mod lexicon;
pub mod scorer;
pub mod words;

use std::fmt;
use std::str::FromStr;

use crate::core::models::Confidence;
use crate::errors::AnalysisError;

pub use keyword::KeywordStrategy;
pub use lexicon::LexiconStrategy;
pub use scorer::SentimentScorer;

/// Cut-offs on `|polarity|` separating the confidence labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
}

impl ConfidenceThresholds {
    pub const LEXICON: Self = Self {
        high: 0.5,
        medium: 0.2,
    };

    pub const KEYWORD: Self = Self {
        high: 0.3,
        medium: 0.1,
    };

    #[must_use]
    pub fn classify(&self, polarity: f64) -> Confidence {
        let magnitude = polarity.abs();
        if magnitude > self.high {
            Confidence::High
        } else if magnitude > self.medium {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// A backend that turns review text into a polarity in `[-1.0, 1.0]`.
pub trait PolarityStrategy: Send + Sync {
    /// Short identifier used in the `processed_by` tag.
    fn name(&self) -> &'static str;

    fn thresholds(&self) -> ConfidenceThresholds;

    /// # Errors
    ///
    /// Returns [`AnalysisError::ScoringFailure`] when the backend cannot
    /// produce a polarity for `text`.
    fn score(&self, text: &str) -> Result<f64, AnalysisError>;
}

/// Which built-in strategy a deployment runs, selected by `SCORING_STRATEGY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Lexicon,
    Keyword,
}

impl StrategyKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Lexicon => "lexicon",
            StrategyKind::Keyword => "keyword",
        }
    }

    #[must_use]
    pub fn build(self) -> Box<dyn PolarityStrategy> {
        match self {
            StrategyKind::Lexicon => Box::new(LexiconStrategy::default()),
            StrategyKind::Keyword => Box::new(KeywordStrategy::default()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicon" => Ok(StrategyKind::Lexicon),
            "keyword" => Ok(StrategyKind::Keyword),
            other => Err(format!(
                "unknown scoring strategy '{other}' (expected 'lexicon' or 'keyword')"
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
