//! Shared test harness for E2E integration tests.
//!
//! Wires the chat API router to a real interpreter and a mock listing
//! source, and drives it through `tower::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cq_chat_api::routes::build_router;
use cq_chat_api::state::AppState;
use cq_interpreter::{CandidateSource, Interpreter, InterpreterConfig, MockCandidateSource};
use cq_protocol::car::Car;
use cq_protocol::chat::ChatReply;

/// End-to-end harness around one in-memory chat API instance.
pub struct TestHarness {
    /// Application state shared with the router.
    pub state: AppState,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness serving the 14-car sample listing.
    pub fn with_sample_data() -> Self {
        Self::from_state(AppState::with_sample_data().unwrap())
    }

    /// Harness with a custom listing (loaded immediately, no reload needed).
    pub fn with_cars(cars: Vec<Car>) -> Self {
        let source = Arc::new(MockCandidateSource::new(cars.clone()));
        Self::from_state(AppState::with_listing(
            Interpreter::standard().unwrap(),
            source,
            cars,
        ))
    }

    /// Harness with a custom interpreter configuration over the sample listing.
    pub fn with_config(config: InterpreterConfig) -> Self {
        Self::from_state(AppState::with_listing(
            Interpreter::new(config).unwrap(),
            Arc::new(MockCandidateSource::with_sample_listing()),
            cq_interpreter::mock::sample_listing(),
        ))
    }

    /// Harness whose listing source is `source` and whose snapshot starts empty.
    pub fn with_source(source: Arc<dyn CandidateSource>) -> Self {
        Self::from_state(AppState::new(Interpreter::standard().unwrap(), source))
    }

    /// Harness over the sample listing with a small conversation log.
    pub fn with_max_chats(max_chats: usize) -> Self {
        Self::from_state(AppState::with_sample_data().unwrap().with_max_chats(max_chats))
    }

    fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Send a chat message (POST /api/v1/chat).
    /// Returns (HTTP status code, response JSON body).
    pub async fn chat(&self, message: &str) -> (StatusCode, serde_json::Value) {
        self.post("/api/v1/chat", serde_json::json!({ "message": message }))
            .await
    }

    /// Send a chat message and decode the reply, asserting success.
    pub async fn chat_ok(&self, message: &str) -> ChatReply {
        let (status, json) = self.chat(message).await;
        assert_eq!(status, StatusCode::OK, "chat '{message}' failed: {json}");
        serde_json::from_value(json).unwrap()
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}

/// A minimal car for hand-built listings.
pub fn car(id: &str, brand: &str, body_type: &str, fuel_type: &str, price: u64) -> Car {
    Car {
        id: id.into(),
        name: format!("{brand} {id}"),
        brand: brand.into(),
        model: id.into(),
        year: None,
        price,
        body_type: body_type.into(),
        fuel_type: fuel_type.into(),
        mileage_kmpl: None,
        power_bhp: None,
        seating_capacity: None,
        transmission: None,
        image_url: None,
    }
}
