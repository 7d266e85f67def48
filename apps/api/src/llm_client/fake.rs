//! Test double: a scripted `ModelService` that records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatRequest, LlmError, ModelService, StructuredRequest};

/// What the fake does when called.
#[derive(Debug, Clone)]
pub enum Outcome {
    Text(String),
    Empty,
    ApiError(u16),
}

impl Outcome {
    fn resolve(&self) -> Result<String, LlmError> {
        match self {
            Outcome::Text(text) => Ok(text.clone()),
            Outcome::Empty => Err(LlmError::EmptyContent),
            Outcome::ApiError(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

pub struct FakeModelService {
    outcome: Outcome,
    structured_calls: Mutex<Vec<StructuredRequest>>,
    chat_calls: Mutex<Vec<ChatRequest>>,
}

impl FakeModelService {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            structured_calls: Mutex::new(Vec::new()),
            chat_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(Outcome::Text(text.into()))
    }

    pub fn failing() -> Self {
        Self::new(Outcome::ApiError(503))
    }

    pub fn structured_requests(&self) -> Vec<StructuredRequest> {
        self.structured_calls.lock().unwrap().clone()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelService for FakeModelService {
    async fn generate_structured(&self, request: &StructuredRequest) -> Result<String, LlmError> {
        self.structured_calls.lock().unwrap().push(request.clone());
        self.outcome.resolve()
    }

    async fn complete_chat(&self, request: &ChatRequest) -> Result<String, LlmError> {
        self.chat_calls.lock().unwrap().push(request.clone());
        self.outcome.resolve()
    }
}
