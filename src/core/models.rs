use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::AnalysisError;

/// Operation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Analyze,
    Health,
    Status,
}

impl Action {
    /// Wire names of every supported action, in the order reported to callers.
    pub const NAMES: [&'static str; 3] = ["analyze", "health", "status"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Analyze => "analyze",
            Action::Health => "health",
            Action::Status => "status",
        }
    }
}

impl FromStr for Action {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyze" => Ok(Action::Analyze),
            "health" => Ok(Action::Health),
            "status" => Ok(Action::Status),
            other => Err(AnalysisError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded invocation. `text` is kept exactly as sent; type, trimming and
/// length checks happen in the dispatcher after the health check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub action: Action,
    pub text: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Inclusive star range a rating of this sentiment is clamped into.
    #[must_use]
    pub fn rating_range(self) -> (f64, f64) {
        match self {
            Sentiment::Positive => (4.0, 5.0),
            Sentiment::Negative => (1.0, 2.0),
            Sentiment::Neutral => (2.5, 3.5),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Output of the scorer for a single piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Polarity in `[-1.0, 1.0]`, rounded to three decimals.
    pub score: f64,
    pub confidence: Confidence,
    /// Star rating in `[1.0, 5.0]`, rounded to one decimal.
    pub rating: f64,
    /// Set only when scoring failed and the neutral fallback was returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Successful `analyze` body: the scorer output plus request metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub timestamp: f64,
    pub text_length: usize,
    pub processed_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub timestamp: f64,
    pub version: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub sentiment_analysis: bool,
    pub rating_generation: bool,
    pub supported_sentiments: Vec<Sentiment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRanges {
    pub positive: String,
    pub neutral: String,
    pub negative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub rating_ranges: RatingRanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub service: String,
    pub healthy: bool,
    pub version: String,
    pub timestamp: f64,
    pub runtime: String,
    pub capabilities: Capabilities,
    pub statistics: Statistics,
}
