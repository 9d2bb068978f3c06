//! CarQuery Chat API: chatbot REST server.
//!
//! Loads the interpreter vocabulary and the car listing snapshot, then
//! serves chat, interpret and listing endpoints.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cq_chat_api::config::ApiConfig;
use cq_chat_api::routes;
use cq_chat_api::state::AppState;
use cq_interpreter::{
    CandidateSource, FileCandidateSource, Interpreter, InterpreterConfig, MockCandidateSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cq-chat-api starting");

    let config = ApiConfig::from_env();

    // ── Interpreter ─────────────────────────────────────────────
    let interpreter_config = match &config.interpreter_config_path {
        Some(path) => {
            tracing::info!(path = %path, "loading interpreter config");
            InterpreterConfig::from_file(path)?
        }
        None => InterpreterConfig::default(),
    };
    let interpreter = Interpreter::new(interpreter_config)?;
    tracing::info!(
        brands = interpreter.config().brands.len(),
        result_limit = interpreter.config().result_limit,
        "interpreter ready"
    );

    // ── Listing source ──────────────────────────────────────────
    let source: Arc<dyn CandidateSource> = match &config.cars_path {
        Some(path) => Arc::new(FileCandidateSource::new(path)),
        None => {
            tracing::warn!("CARS_PATH not set, serving the sample listing");
            Arc::new(MockCandidateSource::with_sample_listing())
        }
    };

    let state = AppState::new(interpreter, source)
        .with_think_delay(Duration::from_millis(config.think_delay_ms))
        .with_max_chats(config.max_chats);
    state.reload().await?;

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
