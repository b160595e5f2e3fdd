use serde_json::Value;
use std::borrow::Cow;

use crate::core::models::{Action, AnalysisRequest};
use crate::errors::{AnalysisError, ValidationError};

/// Longest review, in characters after trimming, accepted by `analyze`.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Length of the text preview written to the logs.
pub const PREVIEW_CHARS: usize = 50;

/// Returns the request object: the decoded `body` string for gateway-style
/// invocations, or the payload itself for direct invocations.
pub fn unwrap_envelope(payload: &Value) -> Result<Cow<'_, Value>, AnalysisError> {
    match payload.get("body") {
        Some(Value::String(raw)) => {
            let decoded: Value = serde_json::from_str(raw)?;
            Ok(Cow::Owned(decoded))
        }
        _ => Ok(Cow::Borrowed(payload)),
    }
}

/// Decodes `action` and `text` from an invocation payload.
///
/// A missing `action` means `analyze`. The request must be a JSON object;
/// `text` is kept as sent and checked by [`validate_text`].
pub fn parse_request(payload: &Value) -> Result<AnalysisRequest, AnalysisError> {
    let body = unwrap_envelope(payload)?;
    let Some(fields) = body.as_object() else {
        return Err(AnalysisError::InvalidPayload(format!(
            "expected a JSON object, got {}",
            json_kind(&body)
        )));
    };

    let action = match fields.get("action") {
        None => Action::default(),
        Some(Value::String(name)) => name.parse()?,
        Some(other) => return Err(AnalysisError::UnknownAction(other.to_string())),
    };

    Ok(AnalysisRequest {
        action,
        text: fields.get("text").cloned(),
    })
}

/// Trims `text` and checks it is present and within [`MAX_TEXT_CHARS`].
///
/// A missing or blank `text` is a validation error; a `text` of any other
/// JSON type (including `null`) is a malformed request.
pub fn validate_text(text: Option<&Value>) -> Result<&str, AnalysisError> {
    let trimmed = match text {
        None => "",
        Some(Value::String(raw)) => raw.trim(),
        Some(other) => {
            return Err(AnalysisError::InvalidPayload(format!(
                "text must be a string, got {}",
                json_kind(other)
            )));
        }
    };
    if trimmed.is_empty() {
        return Err(ValidationError::MissingText.into());
    }

    let length = trimmed.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong {
            length,
            max: MAX_TEXT_CHARS,
        }
        .into());
    }

    Ok(trimmed)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// First [`PREVIEW_CHARS`] characters of `text` followed by an ellipsis.
#[must_use]
pub fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}
