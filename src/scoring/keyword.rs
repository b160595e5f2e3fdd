use super::words::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use super::{ConfidenceThresholds, PolarityStrategy};
use crate::errors::AnalysisError;

/// Each keyword hit moves the polarity by this much per word of text.
const RATIO_SCALE: f64 = 10.0;

/// Polarity from the ratio of positive to negative keyword hits.
///
/// A keyword counts once if it appears anywhere in the lowercased text, so
/// `"fun"` also matches `"funny"`. The net hit count is divided by the
/// whitespace word count, scaled by 10 and clamped to `[-1.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct KeywordStrategy {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for KeywordStrategy {
    fn default() -> Self {
        Self::with_words(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS)
    }
}

impl KeywordStrategy {
    #[must_use]
    pub fn with_words<S: AsRef<str>>(positive: &[S], negative: &[S]) -> Self {
        let normalize = |words: &[S]| {
            words
                .iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect::<Vec<_>>()
        };
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    fn hits(words: &[String], haystack: &str) -> usize {
        words.iter().filter(|w| haystack.contains(w.as_str())).count()
    }
}

impl PolarityStrategy for KeywordStrategy {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn thresholds(&self) -> ConfidenceThresholds {
        ConfidenceThresholds::KEYWORD
    }

    fn score(&self, text: &str) -> Result<f64, AnalysisError> {
        let lowered = text.to_lowercase();
        let positive = Self::hits(&self.positive, &lowered);
        let negative = Self::hits(&self.negative, &lowered);
        let word_count = lowered.split_whitespace().count().max(1);

        #[allow(clippy::cast_precision_loss)]
        let ratio = (positive as f64 - negative as f64) / word_count as f64;
        Ok((ratio * RATIO_SCALE).clamp(-1.0, 1.0))
    }
}
