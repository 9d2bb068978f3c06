//! Chatbot endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use cq_protocol::chat::{ChatReply, ChatRequest, SuggestionSource};

use crate::error::{ApiError, ApiResult};
use crate::reply;
use crate::state::AppState;

/// Longest message accepted, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// How many exchanges `GET /chat` returns.
const RECENT_LIMIT: usize = 50;

/// Trim a user message, rejecting blank or overlong input.
pub fn validate_message(raw: &str) -> ApiResult<&str> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".into()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "message longer than {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(message)
}

/// POST /api/v1/chat — answer a chatbot message with car suggestions.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    let message = validate_message(&req.message)?;

    if !state.think_delay.is_zero() {
        tokio::time::sleep(state.think_delay).await;
    }

    let prefs = state.interpreter.parse(message);
    let (source, picks) = {
        let cars = state.cars.read().await;
        let ranked = state.interpreter.rank(&prefs, &cars);
        if ranked.is_empty() {
            let limit = state.interpreter.config().result_limit;
            (SuggestionSource::Popular, reply::popular_sample(&cars, limit))
        } else {
            (SuggestionSource::Matched, ranked)
        }
    };

    let text = reply::reply_text(&prefs, source, picks.len());
    let chat = ChatReply::new(
        req.session_id,
        message,
        prefs,
        source,
        reply::suggestion_cards(&picks),
        text,
    );

    state.record_chat(chat.clone()).await;

    tracing::info!(
        chat_id = %chat.id,
        session_id = %chat.session_id,
        source = ?source,
        suggestions = chat.suggestions.len(),
        "chat answered"
    );

    Ok(Json(chat))
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatListQuery {
    /// Only exchanges from this conversation.
    pub session_id: Option<Uuid>,
}

/// GET /api/v1/chat — recent exchanges, newest first.
pub async fn list_chats(
    State(state): State<AppState>,
    Query(query): Query<ChatListQuery>,
) -> Json<Vec<serde_json::Value>> {
    let chats = state.chats.read().await;
    let recent: Vec<serde_json::Value> = chats
        .iter()
        .rev()
        .filter(|c| query.session_id.is_none_or(|s| c.session_id == s))
        .take(RECENT_LIMIT)
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "session_id": c.session_id,
                "message": c.message,
                "source": c.source,
                "suggestion_count": c.suggestions.len(),
                "created_at": c.created_at,
            })
        })
        .collect();
    Json(recent)
}

/// GET /api/v1/chat/:id — one exchange in full.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<Uuid>,
) -> ApiResult<Json<ChatReply>> {
    let chats = state.chats.read().await;
    chats
        .iter()
        .find(|c| c.id == chat_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("chat '{chat_id}' not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_trimmed() {
        assert_eq!(validate_message("  suv please \n").unwrap(), "suv please");
    }

    #[test]
    fn blank_message_rejected() {
        assert!(matches!(validate_message(" \t "), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "₹".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_message(&at_limit).is_ok());
        let over = "a".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(matches!(validate_message(&over), Err(ApiError::BadRequest(_))));
    }
}
