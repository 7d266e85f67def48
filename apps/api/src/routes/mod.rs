pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap API
        .route("/api/v1/roadmaps", post(roadmap::handle_generate_roadmap))
        .route("/api/v1/roadmaps/filter", post(roadmap::handle_filter_skills))
        .route(
            "/api/v1/roadmaps/suggestions",
            get(roadmap::handle_suggestions),
        )
        // Assistant API
        .route("/api/v1/assistant", post(assistant::handle_ask))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::fake::FakeModelService;
    use crate::models::roadmap::fixtures::embedded_robotics;
    use crate::state::test_state;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(Arc::new(FakeModelService::replying(""))));
        let request = Request::get("/health").body(Body::empty()).unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_generate_failure_returns_error_envelope_only() {
        let router = build_router(test_state(Arc::new(FakeModelService::failing())));

        let (status, body) = send(
            router,
            post_json("/api/v1/roadmaps", json!({"interest": "Humanoids"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "GENERATION_ERROR");
        assert!(body.get("roadmap").is_none());
    }

    #[tokio::test]
    async fn test_generate_blank_interest_is_bad_request() {
        let router = build_router(test_state(Arc::new(FakeModelService::failing())));

        let (status, body) =
            send(router, post_json("/api/v1/roadmaps", json!({"interest": ""}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_assistant_failure_still_ok() {
        let router = build_router(test_state(Arc::new(FakeModelService::failing())));

        let (status, body) = send(
            router,
            post_json(
                "/api/v1/assistant",
                json!({
                    "history": [],
                    "question": "What is ROS?",
                    "roadmap": embedded_robotics()
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"]["role"], "model");
        assert_eq!(
            body["reply"]["text"],
            crate::assistant::prompts::FALLBACK_REPLY
        );
    }
}
