// Prompt constants for the roadmap assistant.

/// Teaching-assistant system instruction. Replace `{digest}` before sending.
pub const ASSISTANT_SYSTEM_TEMPLATE: &str = "You are a helpful technical teaching assistant. \
    Answer the student's questions based on the generated roadmap below and stay within it. \
    Keep answers concise and encouraging.\n\n{digest}";

/// Returned as the model's turn whenever the assistant cannot produce an answer.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error processing your request.";
