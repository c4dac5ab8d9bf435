// Cross-cutting prompt fragments shared by every content type.
// Each gateway defines its own prompts.rs alongside it for per-type templates.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// The grounding rule appended to all generation and revision prompts.
/// This is the one semantic invariant shared by every content type.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Use ONLY information present in the candidate's bio. \
    Do NOT fabricate experience, employers, dates, degrees, or metrics. \
    Do NOT infer or interpolate details the bio does not state. \
    Where the bio lacks the information a field requires, use the exact \
    placeholder string the schema specifies for that field.";
