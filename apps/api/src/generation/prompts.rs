// All LLM prompt constants for the generation and revision gateways.
// Reuses cross-cutting fragments from llm::prompts. Templates use
// `{placeholder}` substitution, filled in gateway.rs / revision.rs.

/// System prompt for free-text outputs (cover letter, deep analysis).
pub const FREE_TEXT_SYSTEM: &str = "You are an expert career writer producing \
    factual, grounded application materials from a candidate's own bio. \
    Respond with the requested document text only. \
    Do NOT include preamble, commentary, or markdown fences.";

/// Cover letter prompt template.
/// Replace: {grounding_instruction}, {job_description}, {bio}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Write a tailored cover letter for the job below, using only facts from the candidate's bio.

Structure: opening that names the role, two or three short body paragraphs connecting the candidate's actual experience to the job's requirements, and a brief closing. Professional tone, no clichés, no invented enthusiasm metrics.

JOB DESCRIPTION:
{job_description}

CANDIDATE BIO:
{bio}

Return the cover letter text only."#;

/// Deep analysis prompt template.
/// Replace: {grounding_instruction}, {job_description}, {bio}
pub const DEEP_ANALYSIS_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Produce a candid gap analysis of this candidate against this job.

Cover, in order:
1. Requirements the bio clearly satisfies, citing the relevant bio facts.
2. Requirements the bio partially satisfies, and what evidence is thin.
3. Requirements the bio does not address at all.
4. Concrete suggestions for what the candidate should emphasize or gather evidence for — based only on what the bio already contains.

Do NOT soften gaps and do NOT invent qualifications to close them.

JOB DESCRIPTION:
{job_description}

CANDIDATE BIO:
{bio}

Return the analysis text only."#;

/// CV generation prompt template — JSON output against an EXACT schema.
/// Replace: {grounding_instruction}, {job_description}, {bio}, {not_provided}
pub const CV_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Build a structured CV for this candidate, tailored to the job below, from bio facts only.

Return a JSON object with this EXACT schema (no extra fields, no omitted fields):
{
  "fullName": "string",
  "email": "string",
  "phone": "string",
  "location": "string",
  "summary": "2-3 sentence professional summary grounded in the bio",
  "workExperience": [
    {
      "jobTitle": "string",
      "company": "string",
      "duration": "string",
      "responsibilities": ["string"]
    }
  ],
  "education": [
    {"degree": "string", "institution": "string", "year": "string or omit"}
  ],
  "skills": ["string"]
}

HARD RULES:
1. EVERY top-level field MUST be present. If the bio does not contain the information, set the field to the exact string "{not_provided}" — never omit it, never leave it empty.
2. Do NOT invent employers, titles, dates, degrees, or skills.
3. Order workExperience most recent first when the bio gives dates.
4. Keep responsibilities to facts the bio states, reworded for the target role's vocabulary where honest.

JOB DESCRIPTION:
{job_description}

CANDIDATE BIO:
{bio}"#;

/// Q&A prompt template — JSON output against an EXACT schema.
/// Replace: {grounding_instruction}, {job_description}, {bio}, {questions_block}, {answer_not_in_bio}
pub const QA_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Answer application questions for this candidate using bio facts only.

{questions_block}

Return a JSON object with this EXACT schema:
{
  "qaPairs": [
    {"question": "string", "answer": "string"}
  ]
}

HARD RULES:
1. Answer each question in the candidate's first-person voice using only bio facts.
2. If the bio cannot support an answer, set the answer to the exact string "{answer_not_in_bio}".
3. If there are no questions to answer, return {"qaPairs": []}. Do NOT fabricate questions.

JOB DESCRIPTION:
{job_description}

CANDIDATE BIO:
{bio}"#;

/// Questions block when the caller supplied explicit questions.
/// Replace: {questions}
pub const QA_EXPLICIT_QUESTIONS_BLOCK: &str = r#"Answer these questions, in order:
{questions}"#;

/// Questions block when no questions were supplied: extract from the JD only.
pub const QA_EXTRACT_QUESTIONS_BLOCK: &str = "No questions were supplied. \
    Answer ONLY questions that appear explicitly in the job description below. \
    If the job description contains no explicit questions, return an empty qaPairs array.";

/// System prompt for revision calls with free-text output.
pub const REVISION_FREE_TEXT_SYSTEM: &str = "You are an expert career writer revising \
    an existing application document according to the candidate's feedback. \
    Revise in place — preserve the document's structure and grounded facts, \
    change only what the feedback asks for. \
    Respond with the revised document text only, no commentary.";

/// Revision prompt template for free-text artifacts (cover letter).
/// Replace: {grounding_instruction}, {job_description}, {bio}, {original}, {comments}
pub const REVISION_FREE_TEXT_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Revise the document below according to the candidate's feedback. Keep everything the feedback does not touch; do not regenerate from scratch.

JOB DESCRIPTION:
{job_description}

CANDIDATE BIO:
{bio}

ORIGINAL DOCUMENT (revise this, verbatim basis):
{original}

CANDIDATE FEEDBACK:
{comments}

Return the revised document text only."#;

/// Revision prompt template for Q&A artifacts — JSON output.
/// Replace: {grounding_instruction}, {job_description}, {bio}, {original}, {comments}, {answer_not_in_bio}
pub const REVISION_QA_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

Revise the Q&A answers below according to the candidate's feedback. Keep the same questions; change only the answers the feedback concerns. Do not regenerate from scratch.

JOB DESCRIPTION:
{job_description}

CANDIDATE BIO:
{bio}

ORIGINAL ANSWERS (revise these, verbatim basis):
{original}

CANDIDATE FEEDBACK:
{comments}

Return a JSON object with this EXACT schema:
{
  "qaPairs": [
    {"question": "string", "answer": "string"}
  ]
}

If the bio cannot support a revised answer, set it to the exact string "{answer_not_in_bio}"."#;
