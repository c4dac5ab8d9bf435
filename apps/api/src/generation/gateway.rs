//! Generation Gateway — produces one GenerationResult for one validated
//! GenerationRequest.
//!
//! Exactly one outbound model call per invocation; no retry happens here.
//! A transport/service failure surfaces as `ModelInvocation`; a response
//! that fails schema validation after one parse attempt surfaces as
//! `OutputShape`.

use serde::de::DeserializeOwned;
use tracing::info;

use crate::errors::PipelineError;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, CV_PROMPT_TEMPLATE, DEEP_ANALYSIS_PROMPT_TEMPLATE,
    FREE_TEXT_SYSTEM, QA_EXPLICIT_QUESTIONS_BLOCK, QA_EXTRACT_QUESTIONS_BLOCK, QA_PROMPT_TEMPLATE,
};
use crate::llm::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm::{strip_json_fences, ModelBackend};
use crate::schema::{
    ContentType, CvDocument, FreeText, GenerationRequest, GenerationResult, QaSheet,
    ANSWER_NOT_IN_BIO, NOT_PROVIDED,
};

/// Runs one generation call for an already-validated request.
pub async fn generate(
    backend: &dyn ModelBackend,
    request: &GenerationRequest,
) -> Result<GenerationResult, PipelineError> {
    info!("generating {} artifact", request.content_type);

    match request.content_type {
        ContentType::CoverLetter => {
            let prompt = fill_free_text_template(COVER_LETTER_PROMPT_TEMPLATE, request);
            let text = call_free_text(backend, &prompt, FREE_TEXT_SYSTEM).await?;
            Ok(GenerationResult::CoverLetter(FreeText { text }))
        }
        ContentType::DeepAnalysis => {
            let prompt = fill_free_text_template(DEEP_ANALYSIS_PROMPT_TEMPLATE, request);
            let text = call_free_text(backend, &prompt, FREE_TEXT_SYSTEM).await?;
            Ok(GenerationResult::DeepAnalysis(FreeText { text }))
        }
        ContentType::Cv => {
            let prompt = fill_free_text_template(CV_PROMPT_TEMPLATE, request)
                .replace("{not_provided}", NOT_PROVIDED);
            let document: CvDocument = call_json(backend, &prompt).await?;
            Ok(GenerationResult::Cv(document.fill_missing()))
        }
        ContentType::QAndA => {
            let questions_block = match request.questions.as_deref() {
                Some(q) if !q.trim().is_empty() => {
                    QA_EXPLICIT_QUESTIONS_BLOCK.replace("{questions}", q)
                }
                _ => QA_EXTRACT_QUESTIONS_BLOCK.to_string(),
            };
            let prompt = fill_free_text_template(QA_PROMPT_TEMPLATE, request)
                .replace("{questions_block}", &questions_block)
                .replace("{answer_not_in_bio}", ANSWER_NOT_IN_BIO);
            let sheet: QaSheet = call_json(backend, &prompt).await?;
            Ok(GenerationResult::QAndA(sheet))
        }
    }
}

fn fill_free_text_template(template: &str, request: &GenerationRequest) -> String {
    template
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{job_description}", &request.job_description)
        .replace("{bio}", &request.bio)
}

/// One model call expecting plain document text.
pub(crate) async fn call_free_text(
    backend: &dyn ModelBackend,
    prompt: &str,
    system: &str,
) -> Result<String, PipelineError> {
    let raw = backend
        .complete(prompt, system)
        .await
        .map_err(|e| PipelineError::ModelInvocation(e.to_string()))?;

    let text = raw.trim();
    if text.is_empty() {
        return Err(PipelineError::OutputShape(
            "model returned an empty document".to_string(),
        ));
    }
    Ok(text.to_string())
}

/// One model call expecting JSON conforming to `T`. A single parse attempt:
/// fences are stripped, then the output either deserializes or the call
/// fails with `OutputShape`.
pub(crate) async fn call_json<T: DeserializeOwned>(
    backend: &dyn ModelBackend,
    prompt: &str,
) -> Result<T, PipelineError> {
    let raw = backend
        .complete(prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| PipelineError::ModelInvocation(e.to_string()))?;

    serde_json::from_str(strip_json_fences(&raw))
        .map_err(|e| PipelineError::OutputShape(format!("response did not match schema: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockBackend;
    use crate::schema::QaPair;

    fn request(content_type: ContentType) -> GenerationRequest {
        GenerationRequest {
            job_description: "Senior Rust Engineer for the payments platform team. \
                              Own services end to end."
                .to_string(),
            bio: "Ten years building backend systems in Rust and Go at two fintech \
                  startups, most recently leading a team of four engineers."
                .to_string(),
            content_type,
            questions: None,
        }
    }

    #[tokio::test]
    async fn test_cover_letter_returns_non_empty_text() {
        let backend = MockBackend::returning("Dear hiring manager, I am applying.");
        let result = generate(&backend, &request(ContentType::CoverLetter))
            .await
            .unwrap();
        match result {
            GenerationResult::CoverLetter(body) => assert!(!body.text.is_empty()),
            other => panic!("wrong variant: {other:?}"),
        }
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_prompt_carries_job_description_bio_and_grounding() {
        let backend = MockBackend::returning("Dear hiring manager,");
        generate(&backend, &request(ContentType::CoverLetter))
            .await
            .unwrap();
        let prompt = backend.last_prompt().unwrap();
        assert!(prompt.contains("payments platform"));
        assert!(prompt.contains("fintech"));
        assert!(prompt.contains("Do NOT fabricate experience"));
    }

    #[tokio::test]
    async fn test_empty_model_document_is_output_shape_error() {
        let backend = MockBackend::returning("   ");
        let err = generate(&backend, &request(ContentType::DeepAnalysis))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::OutputShape(_)));
    }

    #[tokio::test]
    async fn test_backend_failure_is_model_invocation_error() {
        let backend = MockBackend::failing();
        let err = generate(&backend, &request(ContentType::CoverLetter))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::ModelInvocation(_)));
        assert_eq!(backend.calls(), 1); // exactly one attempt, no retry
    }

    #[tokio::test]
    async fn test_cv_output_parsed_and_missing_fields_filled() {
        let backend = MockBackend::returning(
            r#"{
                "fullName": "Jordan Reyes",
                "email": "",
                "phone": "Not provided",
                "location": "Lisbon",
                "summary": "Backend engineer with fintech experience.",
                "workExperience": [],
                "education": [],
                "skills": ["Rust", "Go"]
            }"#,
        );
        let result = generate(&backend, &request(ContentType::Cv)).await.unwrap();
        match result {
            GenerationResult::Cv(cv) => {
                assert_eq!(cv.email, NOT_PROVIDED);
                assert_eq!(cv.phone, NOT_PROVIDED);
                assert_eq!(cv.full_name, "Jordan Reyes");
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cv_output_with_missing_required_field_is_output_shape_error() {
        // No fullName at all — the schema requires presence, sentinel or not.
        let backend = MockBackend::returning(
            r#"{"email": "a@b.c", "phone": "1", "location": "x", "summary": "s",
                "workExperience": [], "education": [], "skills": []}"#,
        );
        let err = generate(&backend, &request(ContentType::Cv))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::OutputShape(_)));
    }

    #[tokio::test]
    async fn test_cv_fenced_json_is_accepted() {
        let backend = MockBackend::returning(
            "```json\n{\"fullName\": \"Jordan Reyes\", \"email\": \"j@r.dev\", \
             \"phone\": \"1\", \"location\": \"Lisbon\", \"summary\": \"s\", \
             \"workExperience\": [], \"education\": [], \"skills\": []}\n```",
        );
        let result = generate(&backend, &request(ContentType::Cv)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_qanda_without_questions_extracts_from_jd_only() {
        let backend = MockBackend::returning(r#"{"qaPairs": []}"#);
        let mut req = request(ContentType::QAndA);
        req.questions = Some(String::new());
        let result = generate(&backend, &req).await.unwrap();
        match result {
            GenerationResult::QAndA(sheet) => assert!(sheet.qa_pairs.is_empty()),
            other => panic!("wrong variant: {other:?}"),
        }
        let prompt = backend.last_prompt().unwrap();
        assert!(prompt.contains("No questions were supplied"));
    }

    #[tokio::test]
    async fn test_qanda_with_explicit_questions_quotes_them() {
        let backend = MockBackend::returning(
            r#"{"qaPairs": [{"question": "Why us?", "answer": "Not mentioned in the bio"}]}"#,
        );
        let mut req = request(ContentType::QAndA);
        req.questions = Some("Why us?".to_string());
        let result = generate(&backend, &req).await.unwrap();
        match result {
            GenerationResult::QAndA(sheet) => {
                assert_eq!(sheet.qa_pairs.len(), 1);
                assert_eq!(sheet.qa_pairs[0].answer, ANSWER_NOT_IN_BIO);
            }
            other => panic!("wrong variant: {other:?}"),
        }
        assert!(backend.last_prompt().unwrap().contains("Why us?"));
    }

    #[tokio::test]
    async fn test_qa_pair_shape_survives_roundtrip() {
        let pair = QaPair {
            question: "What is your notice period?".to_string(),
            answer: ANSWER_NOT_IN_BIO.to_string(),
        };
        let json = serde_json::to_string(&pair).unwrap();
        let back: QaPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back.answer, ANSWER_NOT_IN_BIO);
    }
}
