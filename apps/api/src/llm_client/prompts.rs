// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to prompts whose output is parsed line by line.
pub const PLAIN_LIST_INSTRUCTION: &str = "\
    Respond in plain text. Put each career recommendation on its own line, \
    starting with the career title. \
    Do NOT use markdown headings, tables, or code fences.";

/// Instruction that keeps the model grounded in the supplied scores.
pub const GROUNDING_INSTRUCTION: &str = "\
    Base every statement only on the trait scores and interests provided. \
    Do NOT invent test results, diagnoses, or personal details.";
