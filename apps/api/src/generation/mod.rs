// Structured-generation pipeline: per-content-type prompts, the generation
// and revision gateways, and the axum handlers that front them.
// All LLM calls go through the llm module — no direct Anthropic calls here.

pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod revision;
