//! Shared application state for the Axum server.
//!
//! The car listing is a snapshot loaded from a `CandidateSource` and
//! replaced wholesale on reload. Chat exchanges are kept in memory, up to
//! `max_chats`; the oldest is dropped first.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use cq_interpreter::mock::sample_listing;
use cq_interpreter::{CandidateSource, Interpreter, InterpreterResult, MockCandidateSource};
use cq_protocol::car::Car;
use cq_protocol::chat::ChatReply;

/// Default capacity of the conversation log.
pub const DEFAULT_MAX_CHATS: usize = 1000;

/// Shared application state, cloned into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Query interpreter (immutable, shared).
    pub interpreter: Arc<Interpreter>,
    /// Where the listing snapshot is (re)loaded from.
    pub source: Arc<dyn CandidateSource>,
    /// Current listing snapshot.
    pub cars: Arc<RwLock<Vec<Car>>>,
    /// Chat exchanges, oldest first.
    pub chats: Arc<RwLock<VecDeque<ChatReply>>>,
    /// Capacity of `chats`.
    pub max_chats: usize,
    /// Cosmetic pause before answering a chat message.
    pub think_delay: Duration,
}

impl AppState {
    /// Create state with an empty snapshot; call `reload` to populate it.
    pub fn new(interpreter: Interpreter, source: Arc<dyn CandidateSource>) -> Self {
        Self::with_listing(interpreter, source, Vec::new())
    }

    /// Create state with an initial snapshot already in place.
    pub fn with_listing(
        interpreter: Interpreter,
        source: Arc<dyn CandidateSource>,
        cars: Vec<Car>,
    ) -> Self {
        Self {
            interpreter: Arc::new(interpreter),
            source,
            cars: Arc::new(RwLock::new(cars)),
            chats: Arc::new(RwLock::new(VecDeque::new())),
            max_chats: DEFAULT_MAX_CHATS,
            think_delay: Duration::ZERO,
        }
    }

    /// Create state preloaded with the sample listing (development / tests).
    pub fn with_sample_data() -> InterpreterResult<Self> {
        Ok(Self::with_listing(
            Interpreter::standard()?,
            Arc::new(MockCandidateSource::with_sample_listing()),
            sample_listing(),
        ))
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Cap the conversation log. Zero is treated as one.
    pub fn with_max_chats(mut self, max_chats: usize) -> Self {
        self.max_chats = max_chats.max(1);
        self
    }

    /// Append an exchange, evicting the oldest ones beyond `max_chats`.
    pub async fn record_chat(&self, chat: ChatReply) {
        let mut chats = self.chats.write().await;
        chats.push_back(chat);
        while chats.len() > self.max_chats {
            chats.pop_front();
        }
    }

    /// Re-read the listing from the source and swap it in. The previous
    /// snapshot stays in place when loading fails.
    pub async fn reload(&self) -> InterpreterResult<usize> {
        let cars = self.source.load().await?;
        let count = cars.len();
        *self.cars.write().await = cars;
        tracing::info!(source = %self.source.describe(), count, "listing snapshot loaded");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cq_protocol::chat::SuggestionSource;

    #[tokio::test]
    async fn sample_state_is_populated() {
        let state = AppState::with_sample_data().unwrap();
        assert_eq!(state.cars.read().await.len(), 14);
        assert!(state.chats.read().await.is_empty());
        assert_eq!(state.think_delay, Duration::ZERO);
        assert_eq!(state.max_chats, DEFAULT_MAX_CHATS);
    }

    fn reply(message: &str) -> ChatReply {
        ChatReply::new(
            None,
            message,
            Default::default(),
            SuggestionSource::Matched,
            Vec::new(),
            "ok",
        )
    }

    #[tokio::test]
    async fn chat_log_evicts_oldest() {
        let state = AppState::with_sample_data().unwrap().with_max_chats(3);
        for n in 0..5 {
            state.record_chat(reply(&format!("message {n}"))).await;
        }

        let chats = state.chats.read().await;
        assert_eq!(chats.len(), 3);
        let messages: Vec<&str> = chats.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[tokio::test]
    async fn zero_capacity_keeps_latest() {
        let state = AppState::with_sample_data().unwrap().with_max_chats(0);
        state.record_chat(reply("first")).await;
        state.record_chat(reply("second")).await;

        let chats = state.chats.read().await;
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].message, "second");
    }

    #[tokio::test]
    async fn reload_replaces_snapshot() {
        let state = AppState::new(
            Interpreter::standard().unwrap(),
            Arc::new(MockCandidateSource::with_sample_listing()),
        );
        assert!(state.cars.read().await.is_empty());

        let count = state.reload().await.unwrap();
        assert_eq!(count, 14);
        assert_eq!(state.cars.read().await.len(), 14);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_snapshot() {
        let mut state = AppState::with_sample_data().unwrap();
        state.source = Arc::new(MockCandidateSource::failing("store down"));

        assert!(state.reload().await.is_err());
        assert_eq!(state.cars.read().await.len(), 14);
    }
}
