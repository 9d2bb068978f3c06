use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::car::Car;
use crate::preferences::QueryPreferences;

/// A message typed into the chatbot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text query ("sporty petrol suv under 20 lakhs").
    pub message: String,
    /// Conversation to attach to. A new one is started when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

/// Where the suggestions in a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    /// Ranked matches for the parsed preferences.
    Matched,
    /// Nothing matched; a sample of the listing is shown instead.
    Popular,
}

/// A car rendered as a chat suggestion card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionCard {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: u64,
    /// Display price ("₹12.50 Lakh").
    pub formatted_price: String,
    pub body_type: String,
    pub fuel_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage_kmpl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_bhp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SuggestionCard {
    pub fn from_car(car: &Car, formatted_price: impl Into<String>) -> Self {
        Self {
            id: car.id.clone(),
            name: car.name.clone(),
            brand: car.brand.clone(),
            price: car.price,
            formatted_price: formatted_price.into(),
            body_type: car.body_type.clone(),
            fuel_type: car.fuel_type.clone(),
            mileage_kmpl: car.mileage_kmpl,
            power_bhp: car.power_bhp,
            seating_capacity: car.seating_capacity,
            image_url: car.image_url.clone(),
        }
    }
}

/// The chatbot's answer to one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Unique exchange ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    pub session_id: Uuid,
    /// The message this reply answers.
    pub message: String,
    /// What the interpreter understood.
    pub preferences: QueryPreferences,
    pub source: SuggestionSource,
    pub suggestions: Vec<SuggestionCard>,
    /// Human-readable answer text.
    pub reply_text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatReply {
    pub fn new(
        session_id: Option<Uuid>,
        message: impl Into<String>,
        preferences: QueryPreferences,
        source: SuggestionSource,
        suggestions: Vec<SuggestionCard>,
        reply_text: impl Into<String>,
    ) -> Self {
        let id = Uuid::now_v7();
        Self {
            id,
            session_id: session_id.unwrap_or(id),
            message: message.into(),
            preferences,
            source,
            suggestions,
            reply_text: reply_text.into(),
            created_at: Utc::now(),
        }
    }
}
