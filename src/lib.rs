/// Movie review sentiment analysis as an AWS Lambda function.
///
/// A single entrypoint accepts `analyze`, `health` and `status` actions. The
/// `analyze` action scores review text into a polarity, a sentiment
/// category, a confidence label and a 1-5 star rating.
///
/// # Architecture
///
/// - `api` decodes the invocation, validates input and shapes responses
/// - `scoring` is the pure text → rating transform with pluggable polarity
///   strategies (word lexicon or keyword ratio)
/// - `core` holds per-invocation configuration and the wire models
///
/// # Example
///
/// ```
/// use movie_sentiment::core::models::Sentiment;
/// use movie_sentiment::scoring::{SentimentScorer, StrategyKind};
///
/// let scorer = SentimentScorer::for_kind(StrategyKind::Keyword);
/// let result = scorer.analyze("This movie was amazing and wonderful");
///
/// assert_eq!(result.sentiment, Sentiment::Positive);
/// assert!((4.0..=5.0).contains(&result.rating));
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod scoring;

pub use errors::{AnalysisError, ValidationError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info` (`debug` with the `debug-logs` feature). Calling it more than once
/// is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// movie_sentiment::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
