//! Narrative output: decision points and the event log.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::character::StagePosition;
use crate::ids::ChoiceId;

/// One selectable option at a decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
    /// Optional mechanical hint shown next to the option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// The current decision point, replaced after every narrative-advancing
/// action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub narrative: String,
    pub choices: Vec<Choice>,
    /// Whether the player may submit free-text actions here.
    pub allow_custom: bool,
    pub mood: String,
    /// Optional per-character stage placement, keyed by character id.
    #[serde(default)]
    pub character_positions: Option<HashMap<String, StagePosition>>,
}

/// Historical log entry fetched from the server.
///
/// The client appends fetched entries to a rolling list and never
/// mutates past ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: i64,
    /// Unix timestamp, seconds (may carry a fractional part).
    pub timestamp: f64,
    pub event_type: String,
    pub content: String,
    #[serde(default)]
    pub extra_data: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_hint_is_optional() {
        let choice: Choice = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "text": "Take the deal"
        }))
        .unwrap();
        assert!(choice.hint.is_none());
        // No hint field serialized back either.
        let round = serde_json::to_value(&choice).unwrap();
        assert!(round.get("hint").is_none());
    }

    #[test]
    fn game_event_tolerates_missing_extra_data() {
        let event: GameEvent = serde_json::from_value(serde_json::json!({
            "id": 7,
            "timestamp": 1700000000.5,
            "event_type": "narrative",
            "content": "The rain starts again."
        }))
        .unwrap();
        assert!(event.extra_data.is_empty());
    }
}
