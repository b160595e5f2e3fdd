//! API Lambda handler - thin boundary around the dispatcher.
//!
//! This module handles:
//! - Loading configuration for each invocation
//! - Converting configuration errors and panics into 500 responses

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

use super::{dispatch, helpers};
use crate::core::config::AppConfig;
use crate::errors::AnalysisError;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error: every failure becomes a response envelope with
/// the matching status code.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "API Lambda received request");
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::err_response(&AnalysisError::Config(e)));
        }
    };
    Ok(handle_payload(&event.payload, &config))
}

/// Dispatches `payload`, turning a panic anywhere below into a 500.
#[must_use]
pub fn handle_payload(payload: &Value, config: &AppConfig) -> Value {
    catch_failures(|| dispatch::dispatch(payload, config))
}

/// Runs `respond`, converting a panic into a 500 response.
pub fn catch_failures<F>(respond: F) -> Value
where
    F: FnOnce() -> Value,
{
    match panic::catch_unwind(AssertUnwindSafe(respond)) {
        Ok(response) => response,
        Err(cause) => {
            let message = panic_message(cause.as_ref());
            error!("Lambda error: {}", message);
            helpers::err_response(&AnalysisError::Internal(message))
        }
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}
