//! Dispatch layer — the only entry point callers use.
//!
//! Per call: Received → Validating → {Invalid | Valid} → Invoking →
//! {Succeeded | Failed}. Every outcome is an `OperationEnvelope`; no error
//! of any kind propagates past this boundary. The layer keeps no state
//! between calls, so concurrent invocations are independent and each call
//! is independently retryable by the caller.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::PipelineError;
use crate::generation::{gateway, revision};
use crate::llm::ModelBackend;
use crate::schema::validate::{validate_generation, validate_revision};
use crate::schema::GenerationResult;

/// Which gateway a raw payload is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Generate,
    Revise,
}

/// The uniform return shape: `{success: true, data}` or
/// `{success: false, error}`. Callers never see anything else.
#[derive(Debug, Serialize)]
pub struct OperationEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GenerationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationEnvelope {
    fn ok(data: GenerationResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Validates the raw payload, routes it to the right gateway, and converts
/// every failure into an error envelope. Always returns; never panics on
/// caller input.
pub async fn handle(
    backend: &dyn ModelBackend,
    raw: Value,
    operation: OperationKind,
) -> OperationEnvelope {
    let request_id = Uuid::new_v4().to_string();
    debug!(%request_id, ?operation, "request received, validating");

    let outcome = run(backend, &raw, operation, &request_id).await;

    match outcome {
        Ok(result) => {
            info!(%request_id, "operation succeeded");
            OperationEnvelope::ok(result)
        }
        Err(e) => {
            e.log_internal(&request_id);
            OperationEnvelope::err(e.user_message())
        }
    }
}

async fn run(
    backend: &dyn ModelBackend,
    raw: &Value,
    operation: OperationKind,
    request_id: &str,
) -> Result<GenerationResult, PipelineError> {
    match operation {
        OperationKind::Generate => {
            let request = validate_generation(raw)?;
            debug!(%request_id, content_type = %request.content_type, "valid, invoking gateway");
            gateway::generate(backend, &request).await
        }
        OperationKind::Revise => {
            let request = validate_revision(raw)?;
            debug!(%request_id, content_type = %request.content_type, "valid, invoking gateway");
            revision::revise(backend, &request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockBackend;
    use serde_json::json;

    fn valid_generation_payload(content_type: &str) -> Value {
        json!({
            "jobDescription": "x".repeat(80),
            "bio": "y".repeat(150),
            "contentType": content_type
        })
    }

    #[tokio::test]
    async fn test_scenario_a_valid_cover_letter_succeeds() {
        let backend = MockBackend::returning("Dear hiring manager, I would like to apply.");
        let envelope = handle(
            &backend,
            valid_generation_payload("coverLetter"),
            OperationKind::Generate,
        )
        .await;

        assert!(envelope.success);
        assert!(envelope.error.is_none());
        match envelope.data.unwrap() {
            GenerationResult::CoverLetter(body) => assert!(!body.text.is_empty()),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_scenario_b_qanda_with_no_questions_yields_empty_pairs() {
        let backend = MockBackend::returning(r#"{"qaPairs": []}"#);
        let mut payload = valid_generation_payload("qAndA");
        payload["questions"] = json!("");
        let envelope = handle(&backend, payload, OperationKind::Generate).await;

        assert!(envelope.success);
        match envelope.data.unwrap() {
            GenerationResult::QAndA(sheet) => assert!(sheet.qa_pairs.is_empty()),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_scenario_c_short_bio_rejected_before_gateway() {
        let backend = MockBackend::returning("never called");
        let payload = json!({
            "jobDescription": "x".repeat(80),
            "bio": "short",
            "contentType": "coverLetter"
        });
        let envelope = handle(&backend, payload, OperationKind::Generate).await;

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        let error = envelope.error.unwrap();
        assert!(error.contains("bio"));
        assert!(error.contains("100"));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_scenario_d_cover_letter_revision_succeeds() {
        let backend = MockBackend::returning("Dear Hiring Manager, I am writing to apply.");
        let payload = json!({
            "jobDescription": "x".repeat(80),
            "bio": "y".repeat(150),
            "originalResponse": "Dear hiring manager, I'm excited to apply!",
            "revisionComments": "make it more formal",
            "contentType": "coverLetter"
        });
        let envelope = handle(&backend, payload, OperationKind::Revise).await;

        assert!(envelope.success);
        match envelope.data.unwrap() {
            GenerationResult::CoverLetter(body) => {
                assert_ne!(body.text, "Dear hiring manager, I'm excited to apply!");
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_revision_of_non_revisable_type_is_error_envelope() {
        let backend = MockBackend::returning("never called");
        let payload = json!({
            "jobDescription": "x".repeat(80),
            "bio": "y".repeat(150),
            "originalResponse": "{\"fullName\": \"Jordan Reyes\"}",
            "revisionComments": "tighten the summary",
            "contentType": "cv"
        });
        let envelope = handle(&backend, payload, OperationKind::Revise).await;

        assert!(!envelope.success);
        assert!(envelope.error.unwrap().contains("does not support revision"));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_becomes_error_envelope_not_panic() {
        let backend = MockBackend::failing();
        let envelope = handle(
            &backend,
            valid_generation_payload("deepAnalysis"),
            OperationKind::Generate,
        )
        .await;

        assert!(!envelope.success);
        // Internal service detail must not leak to the caller.
        assert!(!envelope.error.unwrap().contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_malformed_output_becomes_error_envelope() {
        let backend = MockBackend::returning("not json at all");
        let envelope = handle(
            &backend,
            valid_generation_payload("cv"),
            OperationKind::Generate,
        )
        .await;

        assert!(!envelope.success);
        assert!(envelope.error.is_some());
    }

    #[tokio::test]
    async fn test_garbage_payload_is_validation_error_envelope() {
        let backend = MockBackend::returning("never called");
        let envelope = handle(&backend, json!([1, 2, 3]), OperationKind::Generate).await;

        assert!(!envelope.success);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_envelope_wire_shape() {
        let backend = MockBackend::returning("Dear hiring manager,");
        let envelope = handle(
            &backend,
            valid_generation_payload("coverLetter"),
            OperationKind::Generate,
        )
        .await;
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
        assert_eq!(value["data"]["contentType"], "coverLetter");
    }

    #[tokio::test]
    async fn test_error_envelope_wire_shape() {
        let backend = MockBackend::returning("never called");
        let envelope = handle(&backend, json!({}), OperationKind::Generate).await;
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("data").is_none());
        assert!(value["error"].is_string());
    }

    #[tokio::test]
    async fn test_dispatch_is_stateless_across_calls() {
        // A failed call must not affect a following identical successful one.
        let failing = MockBackend::failing();
        let envelope = handle(
            &failing,
            valid_generation_payload("coverLetter"),
            OperationKind::Generate,
        )
        .await;
        assert!(!envelope.success);

        let working = MockBackend::returning("Dear hiring manager,");
        let envelope = handle(
            &working,
            valid_generation_payload("coverLetter"),
            OperationKind::Generate,
        )
        .await;
        assert!(envelope.success);
    }
}
