// Roadmap assistant: grounded, stateless chat turns.
// All model calls go through llm_client::ModelService.

pub mod bridge;
pub mod handlers;
pub mod prompts;
