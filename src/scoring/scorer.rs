use tracing::warn;

use super::{PolarityStrategy, StrategyKind};
use crate::core::models::{AnalysisResult, Confidence, Sentiment};

/// Polarity strictly above this is positive, strictly below its negation is
/// negative.
pub const SENTIMENT_THRESHOLD: f64 = 0.1;

/// Rating returned when the strategy fails.
pub const FALLBACK_RATING: f64 = 3.0;

/// Maps review text to an [`AnalysisResult`] using a pluggable polarity
/// strategy. Stateless: the same text always yields the same result.
pub struct SentimentScorer {
    strategy: Box<dyn PolarityStrategy>,
}

impl SentimentScorer {
    #[must_use]
    pub fn new(strategy: Box<dyn PolarityStrategy>) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn for_kind(kind: StrategyKind) -> Self {
        Self::new(kind.build())
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Tag identifying where a result was produced, e.g. `lambda-lexicon`.
    #[must_use]
    pub fn source_tag(&self) -> String {
        format!("lambda-{}", self.strategy.name())
    }

    /// Scores `text`, which the caller has already trimmed and bounded.
    ///
    /// Never fails: a strategy error produces the neutral fallback with the
    /// error description attached.
    #[must_use]
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        match self.strategy.score(text) {
            Ok(polarity) if polarity.is_finite() => self.classify(polarity),
            Ok(polarity) => {
                warn!(strategy = self.strategy.name(), %polarity, "Non-finite polarity, using fallback");
                fallback(format!("non-finite polarity: {polarity}"))
            }
            Err(e) => {
                warn!(strategy = self.strategy.name(), error = %e, "Scoring failed, using fallback");
                fallback(e.to_string())
            }
        }
    }

    fn classify(&self, polarity: f64) -> AnalysisResult {
        let polarity = polarity.clamp(-1.0, 1.0);
        let sentiment = classify_sentiment(polarity);

        AnalysisResult {
            sentiment,
            score: round_to(polarity, 3),
            confidence: self.strategy.thresholds().classify(polarity),
            rating: star_rating(sentiment, polarity),
            error: None,
        }
    }
}

#[must_use]
pub fn classify_sentiment(polarity: f64) -> Sentiment {
    if polarity > SENTIMENT_THRESHOLD {
        Sentiment::Positive
    } else if polarity < -SENTIMENT_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Star rating for a classified polarity, clamped into the sentiment's band
/// and rounded to one decimal.
#[must_use]
pub fn star_rating(sentiment: Sentiment, polarity: f64) -> f64 {
    let raw = match sentiment {
        Sentiment::Positive => 4.0 + polarity,
        Sentiment::Negative => 2.0 + polarity,
        Sentiment::Neutral => 3.0 + polarity * 0.5,
    };
    let (low, high) = sentiment.rating_range();
    round_to(raw.clamp(low, high), 1)
}

#[must_use]
pub fn fallback(error: String) -> AnalysisResult {
    AnalysisResult {
        sentiment: Sentiment::Neutral,
        score: 0.0,
        confidence: Confidence::Low,
        rating: FALLBACK_RATING,
        error: Some(error),
    }
}

#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
