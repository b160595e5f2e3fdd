//! Response envelope builders shared by every action.
//!
//! Responses use the API Gateway proxy shape: `statusCode`, CORS `headers`,
//! and a `body` holding the JSON-encoded payload as a string.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::AnalysisError;

/// Headers attached to every response.
#[must_use]
pub fn default_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, GET, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type"
    })
}

/// Wraps `body` in the response envelope with the given status code.
#[must_use]
pub fn response<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        json!({ "error": "Analysis failed", "message": e.to_string() }).to_string()
    });
    json!({
        "statusCode": status_code,
        "headers": default_headers(),
        "body": body
    })
}

/// Returns a 200 OK response.
#[must_use]
pub fn ok<T: Serialize + ?Sized>(body: &T) -> Value {
    response(200, body)
}

/// Returns the error response for `error`, with its mapped status code.
#[must_use]
pub fn err_response(error: &AnalysisError) -> Value {
    response(error.status_code(), &error.to_body())
}

/// Extracts the decoded body of an envelope built by [`response`].
#[must_use]
pub fn body_of(envelope: &Value) -> Option<Value> {
    envelope
        .get("body")
        .and_then(Value::as_str)
        .and_then(|raw| serde_json::from_str(raw).ok())
}

/// Extracts the status code of an envelope built by [`response`].
#[must_use]
pub fn status_of(envelope: &Value) -> Option<u16> {
    envelope
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
}
