// Roadmap generation: prompt + schema construction, strict decoding, HTTP surface.
// All model calls go through llm_client::ModelService.

pub mod builder;
pub mod handlers;
pub mod prompts;
pub mod schema;
