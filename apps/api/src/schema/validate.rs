//! Input validators. Each validator inspects the raw JSON payload and
//! collects every violated constraint before failing, so the caller can fix
//! all problems in one pass instead of resubmitting field by field.

use serde_json::Value;

use crate::errors::{FieldViolation, ValidationError};
use crate::schema::{
    ContentType, GenerationRequest, RevisionRequest, MIN_BIO_CHARS, MIN_JOB_DESCRIPTION_CHARS,
    MIN_REVISION_COMMENT_CHARS,
};

/// Validates a raw generation payload. Returns the typed request only when
/// every constraint holds; otherwise every violation is reported at once.
pub fn validate_generation(raw: &Value) -> Result<GenerationRequest, ValidationError> {
    let mut violations = Vec::new();

    check_text_field(raw, "jobDescription", MIN_JOB_DESCRIPTION_CHARS, &mut violations);
    check_text_field(raw, "bio", MIN_BIO_CHARS, &mut violations);
    check_content_type(raw, &mut violations);

    if let Some(questions) = raw.get("questions") {
        if !questions.is_null() && !questions.is_string() {
            violations.push(FieldViolation::new("questions", "must be a string when present"));
        }
    }

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    // All constraints checked above; deserialization cannot fail on shape now,
    // but a structural surprise still maps to a violation rather than a panic.
    serde_json::from_value(raw.clone()).map_err(|e| {
        ValidationError::new(vec![FieldViolation::new("request", format!("malformed payload: {e}"))])
    })
}

/// Validates a raw revision payload. The content type must be in the
/// revisable set before any model call is attempted; that check lives in the
/// revision gateway, not here — validation only guarantees a well-formed
/// request.
pub fn validate_revision(raw: &Value) -> Result<RevisionRequest, ValidationError> {
    let mut violations = Vec::new();

    check_text_field(raw, "jobDescription", MIN_JOB_DESCRIPTION_CHARS, &mut violations);
    check_text_field(raw, "bio", MIN_BIO_CHARS, &mut violations);
    check_text_field(raw, "revisionComments", MIN_REVISION_COMMENT_CHARS, &mut violations);
    check_content_type(raw, &mut violations);

    match raw.get("originalResponse").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => {}
        Some(_) => violations.push(FieldViolation::new("originalResponse", "must not be empty")),
        None => violations.push(FieldViolation::new("originalResponse", "is required")),
    }

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    serde_json::from_value(raw.clone()).map_err(|e| {
        ValidationError::new(vec![FieldViolation::new("request", format!("malformed payload: {e}"))])
    })
}

fn check_text_field(raw: &Value, field: &str, min_chars: usize, out: &mut Vec<FieldViolation>) {
    match raw.get(field).and_then(Value::as_str) {
        Some(text) => {
            let len = text.trim().chars().count();
            if len < min_chars {
                out.push(FieldViolation::new(
                    field,
                    format!("must be at least {min_chars} characters (got {len})"),
                ));
            }
        }
        None => out.push(FieldViolation::new(field, "is required")),
    }
}

fn check_content_type(raw: &Value, out: &mut Vec<FieldViolation>) {
    match raw.get("contentType") {
        Some(value) => {
            if serde_json::from_value::<ContentType>(value.clone()).is_err() {
                out.push(FieldViolation::new(
                    "contentType",
                    "must be one of: coverLetter, cv, deepAnalysis, qAndA",
                ));
            }
        }
        None => out.push(FieldViolation::new("contentType", "is required")),
    }
}
