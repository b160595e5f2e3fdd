use movie_sentiment::errors::{AnalysisError, ValidationError};
use std::error::Error;

#[test]
fn test_analysis_error_implements_error_trait() {
    // Verify AnalysisError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = AnalysisError::ScoringFailure("backend down".to_string());
    assert_error(&error);
    assert_error(&ValidationError::MissingText);
}

#[test]
fn test_analysis_error_display() {
    let error = AnalysisError::UnknownAction("foo".to_string());
    assert_eq!(format!("{error}"), "Unknown action: foo");

    let error = AnalysisError::ServiceUnhealthy;
    assert_eq!(format!("{error}"), "Lambda service is unhealthy");

    let error: AnalysisError = ValidationError::MissingText.into();
    assert_eq!(format!("{error}"), "Text is required for analysis");
}

#[test]
fn test_status_code_mapping() {
    let too_long: AnalysisError = ValidationError::TextTooLong {
        length: 5001,
        max: 5000,
    }
    .into();
    assert_eq!(too_long.status_code(), 400);
    assert_eq!(AnalysisError::UnknownAction("x".into()).status_code(), 400);
    assert_eq!(AnalysisError::ServiceUnhealthy.status_code(), 503);
    assert_eq!(AnalysisError::Internal("boom".into()).status_code(), 500);
    assert_eq!(AnalysisError::Config("bad".into()).status_code(), 500);
}

#[test]
fn test_error_bodies() {
    let too_long: AnalysisError = ValidationError::TextTooLong {
        length: 6000,
        max: 5000,
    }
    .into();
    let body = too_long.to_body();
    assert_eq!(body["error"], "Text too long");
    assert_eq!(body["message"], "Text must be less than 5000 characters");

    let body = AnalysisError::UnknownAction("foo".into()).to_body();
    assert_eq!(body["error"], "Unknown action: foo");
    assert_eq!(
        body["valid_actions"],
        serde_json::json!(["analyze", "health", "status"])
    );

    let body = AnalysisError::Internal("boom".into()).to_body();
    assert_eq!(body["error"], "Analysis failed");
    assert_eq!(body["message"], "boom");
}

#[test]
fn test_analysis_error_from_serde_json() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let analysis_err: AnalysisError = err.into();

    match analysis_err {
        AnalysisError::InvalidPayload(msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }
}
