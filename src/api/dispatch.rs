//! Routes a decoded invocation to the scorer or to the health/status
//! responders and shapes the result into a response envelope.

use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::core::config::{AppConfig, RUNTIME};
use crate::core::models::{
    Action, AnalysisRequest, AnalysisResponse, Capabilities, HealthReport, RatingRanges,
    Sentiment, Statistics, StatusReport,
};
use crate::errors::AnalysisError;
use crate::scoring::SentimentScorer;

const HEALTH_MESSAGE: &str = "Lambda sentiment analysis service";

/// Handles one invocation with the scorer selected by `config`.
#[must_use]
pub fn dispatch(payload: &Value, config: &AppConfig) -> Value {
    let scorer = SentimentScorer::for_kind(config.strategy);
    dispatch_with(payload, config, &scorer)
}

/// Handles one invocation with an explicit scorer. Every outcome, including
/// failures, is returned as a response envelope.
#[must_use]
pub fn dispatch_with(payload: &Value, config: &AppConfig, scorer: &SentimentScorer) -> Value {
    match route(payload, config, scorer) {
        Ok(response) => response,
        Err(e) => {
            let status = e.status_code();
            if status >= 500 && !matches!(e, AnalysisError::ServiceUnhealthy) {
                error!(status, error = %e, "Request failed");
            } else {
                warn!(status, error = %e, "Request rejected");
            }
            helpers::err_response(&e)
        }
    }
}

fn route(
    payload: &Value,
    config: &AppConfig,
    scorer: &SentimentScorer,
) -> Result<Value, AnalysisError> {
    let request = parsing::parse_request(payload)?;
    info!(action = %request.action, "Dispatching request");

    match request.action {
        Action::Health => Ok(health(config)),
        Action::Status => Ok(status(config)),
        Action::Analyze => analyze(&request, config, scorer),
    }
}

fn health(config: &AppConfig) -> Value {
    let (code, status, message) = if config.healthy {
        (200, "healthy", HEALTH_MESSAGE.to_string())
    } else {
        (
            503,
            "unhealthy",
            format!("{HEALTH_MESSAGE} (simulated failure)"),
        )
    };

    helpers::response(
        code,
        &HealthReport {
            status: status.to_string(),
            service: config.service_name.clone(),
            timestamp: now_epoch_seconds(),
            version: config.version.clone(),
            message,
        },
    )
}

fn status(config: &AppConfig) -> Value {
    helpers::ok(&StatusReport {
        service: config.service_name.clone(),
        healthy: config.healthy,
        version: config.version.clone(),
        timestamp: now_epoch_seconds(),
        runtime: RUNTIME.to_string(),
        capabilities: Capabilities {
            sentiment_analysis: true,
            rating_generation: true,
            supported_sentiments: Sentiment::ALL.to_vec(),
        },
        statistics: Statistics {
            rating_ranges: RatingRanges {
                positive: describe_range(Sentiment::Positive),
                neutral: describe_range(Sentiment::Neutral),
                negative: describe_range(Sentiment::Negative),
            },
        },
    })
}

fn analyze(
    request: &AnalysisRequest,
    config: &AppConfig,
    scorer: &SentimentScorer,
) -> Result<Value, AnalysisError> {
    if !config.healthy {
        return Err(AnalysisError::ServiceUnhealthy);
    }

    let text = parsing::validate_text(request.text.as_ref())?;
    let result = scorer.analyze(text);

    info!(
        preview = %parsing::preview(text),
        sentiment = %result.sentiment,
        score = result.score,
        rating = result.rating,
        "Analyzed review"
    );

    Ok(helpers::ok(&AnalysisResponse {
        result,
        timestamp: now_epoch_seconds(),
        text_length: text.chars().count(),
        processed_by: scorer.source_tag(),
    }))
}

fn describe_range(sentiment: Sentiment) -> String {
    let (low, high) = sentiment.rating_range();
    format!("{low:.1}-{high:.1} stars")
}

#[allow(clippy::cast_precision_loss)]
fn now_epoch_seconds() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
