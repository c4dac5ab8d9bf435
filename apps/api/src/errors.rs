use thiserror::Error;

use crate::schema::ContentType;

/// One violated input constraint. Validation collects every violation so the
/// caller can present all problems at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Input validation failure carrying the full list of violated constraints.
#[derive(Debug, Clone, Error)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// All violations joined into one human-readable line.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// The pipeline error taxonomy. All four kinds are caught at the dispatch
/// boundary and converted to a `{success: false, error}` envelope — nothing
/// propagates past dispatch as an unhandled error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Caller input fails schema constraints. Recoverable: correct the input.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Network, timeout, or service error calling the external model.
    /// Recoverable: the caller may retry manually.
    #[error("The generation service could not be reached. Please try again.")]
    ModelInvocation(String),

    /// The model responded but its output failed schema validation after one
    /// parse attempt. Recoverable: the caller may retry.
    #[error("The generated output was malformed. Please try again.")]
    OutputShape(String),

    /// Revision requested for a content type that does not support it.
    /// Not recoverable by retry: the caller must change the request.
    #[error("Content type '{0}' does not support revision")]
    UnsupportedContentType(ContentType),
}

impl PipelineError {
    /// The message surfaced to callers. Safe to display: no internal stack
    /// traces, no raw model error bodies, no secrets.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Logs the internal diagnostic detail that must not reach callers.
    pub fn log_internal(&self, request_id: &str) {
        match self {
            PipelineError::Validation(e) => {
                tracing::warn!(request_id, "validation rejected input: {}", e.summary());
            }
            PipelineError::ModelInvocation(detail) => {
                tracing::error!(request_id, "model invocation failed: {detail}");
            }
            PipelineError::OutputShape(detail) => {
                tracing::error!(request_id, "model output failed validation: {detail}");
            }
            PipelineError::UnsupportedContentType(ct) => {
                tracing::warn!(request_id, "revision requested for non-revisable type {ct}");
            }
        }
    }
}
