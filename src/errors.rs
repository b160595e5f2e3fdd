use serde_json::{Value, json};
use thiserror::Error;

use crate::core::models::Action;

/// Input problems with the `text` field of an `analyze` request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text is required for analysis")]
    MissingText,

    #[error("Text too long")]
    TextTooLong { length: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Lambda service is unhealthy")]
    ServiceUnhealthy,

    #[error("Scoring backend failed: {0}")]
    ScoringFailure(String),

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        AnalysisError::InvalidPayload(error.to_string())
    }
}

impl AnalysisError {
    /// HTTP-style status code reported in the response envelope.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::Validation(_) | AnalysisError::UnknownAction(_) => 400,
            AnalysisError::ServiceUnhealthy => 503,
            AnalysisError::ScoringFailure(_)
            | AnalysisError::InvalidPayload(_)
            | AnalysisError::Config(_)
            | AnalysisError::Internal(_) => 500,
        }
    }

    /// JSON body describing the failure to the caller.
    #[must_use]
    pub fn to_body(&self) -> Value {
        match self {
            AnalysisError::Validation(ValidationError::MissingText) => {
                json!({ "error": self.to_string() })
            }
            AnalysisError::Validation(ValidationError::TextTooLong { max, .. }) => json!({
                "error": self.to_string(),
                "message": format!("Text must be less than {max} characters"),
            }),
            AnalysisError::UnknownAction(_) => json!({
                "error": self.to_string(),
                "valid_actions": Action::NAMES,
            }),
            AnalysisError::ServiceUnhealthy => json!({
                "error": self.to_string(),
                "message": "Sentiment analysis is temporarily unavailable",
            }),
            _ => json!({
                "error": "Analysis failed",
                "message": self.to_string(),
            }),
        }
    }
}
