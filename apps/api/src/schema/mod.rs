//! Schema Layer — the single source of truth for every payload shape crossing
//! the generation boundary.
//!
//! Missing information is represented by reserved placeholder strings, never
//! by absent fields: downstream rendering always sees populated text.

pub mod validate;

use serde::{Deserialize, Serialize};

/// Sentinel for a CV field the bio does not support.
pub const NOT_PROVIDED: &str = "Not provided";

/// Sentinel for a question the bio cannot answer.
pub const ANSWER_NOT_IN_BIO: &str = "Not mentioned in the bio";

/// Minimum accepted job description length, in characters.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

/// Minimum accepted bio length, in characters.
pub const MIN_BIO_CHARS: usize = 100;

/// Minimum accepted revision comment length, in characters.
pub const MIN_REVISION_COMMENT_CHARS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Content types
// ────────────────────────────────────────────────────────────────────────────

/// The discriminant selecting which prompt template and output schema applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    CoverLetter,
    Cv,
    DeepAnalysis,
    QAndA,
}

impl ContentType {
    /// Content types whose results can be revised with user feedback.
    pub const REVISABLE: &'static [ContentType] =
        &[ContentType::CoverLetter, ContentType::QAndA];

    pub fn is_revisable(self) -> bool {
        Self::REVISABLE.contains(&self)
    }

    /// The wire name, as it appears in the `contentType` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::CoverLetter => "coverLetter",
            ContentType::Cv => "cv",
            ContentType::DeepAnalysis => "deepAnalysis",
            ContentType::QAndA => "qAndA",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// One generation request, constructed fresh per call and never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub job_description: String,
    pub bio: String,
    pub content_type: ContentType,
    /// Explicit questions for Q&A generation. When absent or empty, questions
    /// are extracted from the job description instead.
    #[serde(default)]
    pub questions: Option<String>,
}

/// A revision request: the prior result plus free-text feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionRequest {
    pub job_description: String,
    pub bio: String,
    /// The prior GenerationResult, serialized to text, quoted verbatim in the
    /// revision prompt so the model revises in place.
    pub original_response: String,
    pub revision_comments: String,
    pub content_type: ContentType,
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// Free-text result body (cover letters and deep analyses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeText {
    pub text: String,
}

/// One entry in the CV work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub job_title: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

/// One entry in the CV education section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: Option<String>,
}

/// Structured CV. Every field is always populated text after normalization —
/// `NOT_PROVIDED` stands in where the bio lacks the information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl CvDocument {
    /// Replaces empty or whitespace-only string fields with the
    /// `NOT_PROVIDED` sentinel. The model is instructed to emit the sentinel
    /// itself; this pass covers the cases where it emits `""` instead.
    pub fn fill_missing(mut self) -> Self {
        fill(&mut self.full_name);
        fill(&mut self.email);
        fill(&mut self.phone);
        fill(&mut self.location);
        fill(&mut self.summary);
        for exp in &mut self.work_experience {
            fill(&mut exp.job_title);
            fill(&mut exp.company);
            fill(&mut exp.duration);
            exp.responsibilities.retain(|r| !r.trim().is_empty());
        }
        for edu in &mut self.education {
            fill(&mut edu.degree);
            fill(&mut edu.institution);
            if let Some(year) = &edu.year {
                if year.trim().is_empty() {
                    edu.year = None;
                }
            }
        }
        self.skills.retain(|s| !s.trim().is_empty());
        self
    }
}

fn fill(field: &mut String) {
    if field.trim().is_empty() {
        *field = NOT_PROVIDED.to_string();
    }
}

/// One question/answer pair. Unanswerable questions carry the
/// `ANSWER_NOT_IN_BIO` sentinel as their answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Q&A answer sheet. Empty when the job description contains no questions
/// and none were supplied — never padded with fabricated questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaSheet {
    pub qa_pairs: Vec<QaPair>,
}

/// The result union, tagged by content type on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "contentType", rename_all = "camelCase")]
pub enum GenerationResult {
    CoverLetter(FreeText),
    Cv(CvDocument),
    DeepAnalysis(FreeText),
    QAndA(QaSheet),
}

impl GenerationResult {
    pub fn content_type(&self) -> ContentType {
        match self {
            GenerationResult::CoverLetter(_) => ContentType::CoverLetter,
            GenerationResult::Cv(_) => ContentType::Cv,
            GenerationResult::DeepAnalysis(_) => ContentType::DeepAnalysis,
            GenerationResult::QAndA(_) => ContentType::QAndA,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
