// Cross-cutting prompt fragments shared by every flow that talks to the model.
// Each flow keeps its own prompts.rs alongside it.

/// Appended to system instructions of schema-constrained calls.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single JSON document only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
