//! Lexicon-based polarity backed by the VADER sentiment lexicon.
//!
//! VADER scores words from a curated English lexicon of several thousand
//! entries, then adjusts for negation, intensifiers, capitalization,
//! punctuation emphasis and contrastive "but". Its normalized `compound`
//! score in `[-1.0, 1.0]` is used directly as the polarity.

use std::panic::{self, AssertUnwindSafe};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::{ConfidenceThresholds, PolarityStrategy};
use crate::errors::AnalysisError;

const COMPOUND_KEY: &str = "compound";

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconStrategy;

impl LexiconStrategy {
    fn compound(text: &str) -> Result<f64, AnalysisError> {
        let analyzed = panic::catch_unwind(AssertUnwindSafe(|| {
            SentimentIntensityAnalyzer::new()
                .polarity_scores(text)
                .get(COMPOUND_KEY)
                .copied()
        }));

        match analyzed {
            Ok(Some(compound)) => Ok(compound),
            Ok(None) => Err(AnalysisError::ScoringFailure(format!(
                "lexicon returned no {COMPOUND_KEY} score"
            ))),
            Err(_) => Err(AnalysisError::ScoringFailure(
                "lexicon analyzer panicked".to_string(),
            )),
        }
    }
}

impl PolarityStrategy for LexiconStrategy {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn thresholds(&self) -> ConfidenceThresholds {
        ConfidenceThresholds::LEXICON
    }

    fn score(&self, text: &str) -> Result<f64, AnalysisError> {
        let compound = Self::compound(text)?;
        if !compound.is_finite() {
            return Err(AnalysisError::ScoringFailure(format!(
                "lexicon produced a non-finite polarity ({compound})"
            )));
        }
        Ok(compound.clamp(-1.0, 1.0))
    }
}
