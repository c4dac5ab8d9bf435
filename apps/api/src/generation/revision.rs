//! Revision Gateway — given an existing result and free-text feedback,
//! produces a new result of the identical shape.
//!
//! The revision prompt carries the full original context (job description,
//! bio, prior output verbatim, new feedback) so the model revises in place
//! rather than regenerating with different invented content. Non-revisable
//! content types are rejected before any model call.

use tracing::info;

use crate::errors::PipelineError;
use crate::generation::gateway::{call_free_text, call_json};
use crate::generation::prompts::{
    REVISION_FREE_TEXT_PROMPT_TEMPLATE, REVISION_FREE_TEXT_SYSTEM, REVISION_QA_PROMPT_TEMPLATE,
};
use crate::llm::prompts::GROUNDING_INSTRUCTION;
use crate::llm::ModelBackend;
use crate::schema::{
    ContentType, FreeText, GenerationResult, QaSheet, RevisionRequest, ANSWER_NOT_IN_BIO,
};

/// Runs one revision call for an already-validated request.
pub async fn revise(
    backend: &dyn ModelBackend,
    request: &RevisionRequest,
) -> Result<GenerationResult, PipelineError> {
    if !request.content_type.is_revisable() {
        return Err(PipelineError::UnsupportedContentType(request.content_type));
    }

    info!("revising {} artifact", request.content_type);

    match request.content_type {
        ContentType::CoverLetter => {
            let prompt = fill_revision_template(REVISION_FREE_TEXT_PROMPT_TEMPLATE, request);
            let text = call_free_text(backend, &prompt, REVISION_FREE_TEXT_SYSTEM).await?;
            Ok(GenerationResult::CoverLetter(FreeText { text }))
        }
        ContentType::QAndA => {
            let prompt = fill_revision_template(REVISION_QA_PROMPT_TEMPLATE, request)
                .replace("{answer_not_in_bio}", ANSWER_NOT_IN_BIO);
            let sheet: QaSheet = call_json(backend, &prompt).await?;
            Ok(GenerationResult::QAndA(sheet))
        }
        // Unreachable: the revisable-set guard above rejects these.
        ContentType::Cv | ContentType::DeepAnalysis => {
            Err(PipelineError::UnsupportedContentType(request.content_type))
        }
    }
}

fn fill_revision_template(template: &str, request: &RevisionRequest) -> String {
    template
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{job_description}", &request.job_description)
        .replace("{bio}", &request.bio)
        .replace("{original}", &request.original_response)
        .replace("{comments}", &request.revision_comments)
}
