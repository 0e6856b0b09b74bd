//! Conversation types for Renexus.
//!
//! A conversation is a sequence of exchanges between the user and their
//! companion. Each turn stores the user message, the companion's reply,
//! and the analysis captured at that moment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::companion::CompanionId;

/// Unique identifier for a conversation turn, wrapping a UUID v7.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConversationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One exchange between the user and the companion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: ConversationId,
    pub companion_id: CompanionId,
    pub user_message: String,
    pub reply: String,
    /// Sentiment ratio of the user message at analysis time (0..=1).
    pub sentiment: Option<f64>,
    /// JSON snapshot of the per-message trait analysis.
    pub trait_snapshot: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_id_roundtrip() {
        let id = ConversationId::new();
        let parsed: ConversationId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_turn_serde_roundtrip() {
        let turn = ConversationTurn {
            id: ConversationId::new(),
            companion_id: CompanionId::new(),
            user_message: "hello there".to_string(),
            reply: "well hello".to_string(),
            sentiment: Some(0.75),
            trait_snapshot: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&turn).unwrap();
        let parsed: ConversationTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.user_message, "hello there");
        assert!((parsed.sentiment.unwrap() - 0.75).abs() < f64::EPSILON);
    }
}
