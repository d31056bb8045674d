//! Response bodies returned by the backend.

use serde::{Deserialize, Serialize};

use reverie_domain::{
    Checkpoint, CheckpointId, Choice, ChoiceSet, EconomyInfo, GameEvent, Location, Npc, Player,
    TemplateId, WorldId, WorldState,
};

// =============================================================================
// Gameplay
// =============================================================================

/// Full world snapshot for one player session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldStateResponse {
    pub world: WorldState,
    pub location: Location,
    pub npcs: Vec<Npc>,
    pub player: Player,
    pub economy: EconomyInfo,
    /// Absent while the server has no open decision point.
    #[serde(default)]
    pub choices: Option<ChoiceSet>,
}

/// Rolling event log slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

/// Outcome of a choice selection or a free-text action.
///
/// `success = false` is a semantic rejection ("you can't do that"):
/// the narrative is still shown but no world state changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub narrative: String,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    pub mood: String,
}

/// One NPC dialog reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkResponse {
    pub npc_name: String,
    pub response: String,
    pub emotion: String,
    pub relationship: i32,
    #[serde(default)]
    pub portrait_url: Option<String>,
    pub mood: String,
}

/// Acknowledgement of a manual checkpoint save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointSavedResponse {
    pub success: bool,
    pub checkpoint_id: CheckpointId,
    pub description: String,
    pub created_at: String,
}

/// Acknowledgement of a checkpoint restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointRestoredResponse {
    pub success: bool,
    pub checkpoint_id: CheckpointId,
    pub description: String,
    pub restored_at: String,
}

/// Available save-game records for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointListResponse {
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,
}

// =============================================================================
// Admin
// =============================================================================

/// Generic `{ "success": ... }` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub success: bool,
}

/// Login outcome; `token` is present on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement carrying the id of a created template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: TemplateId,
}

/// A character template as stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    pub personality: String,
    #[serde(default)]
    pub portrait_path: Option<String>,
    #[serde(default)]
    pub first_message: Option<String>,
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub example_dialogs: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_player_avatar: bool,
    #[serde(default)]
    pub initial_attributes: serde_json::Map<String, serde_json::Value>,
    /// Raw imported card payload, kept opaque.
    #[serde(default)]
    pub raw_card_data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterListResponse {
    #[serde(default)]
    pub characters: Vec<CharacterTemplate>,
}

/// A location template as stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTemplate {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub background_path: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub default_connections: Vec<String>,
    #[serde(default)]
    pub default_characters: Vec<String>,
    #[serde(default)]
    pub is_starting_location: bool,
    #[serde(default)]
    pub raw_card_data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationListResponse {
    #[serde(default)]
    pub locations: Vec<LocationTemplate>,
}

/// Result of a PNG character-card import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCardResponse {
    pub success: bool,
    pub id: TemplateId,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortraitUploadedResponse {
    pub success: bool,
    pub portrait_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundUploadedResponse {
    pub success: bool,
    pub background_path: String,
}

/// Free-text world rules for the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldRulesResponse {
    pub world_id: WorldId,
    pub world_name: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// One selectable starting avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarSummary {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub portrait_path: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub initial_attributes: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarListResponse {
    #[serde(default)]
    pub avatars: Vec<AvatarSummary>,
}

/// Player record created from an avatar template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarPlayer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub portrait_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartingLocation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub background_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarSelectedResponse {
    pub success: bool,
    pub player: AvatarPlayer,
    #[serde(default)]
    pub starting_location: Option<StartingLocation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_state_response_allows_missing_choices() {
        let response: WorldStateResponse = serde_json::from_value(serde_json::json!({
            "world": { "id": "world_1", "time": 0, "name": "Neon City", "mood": "calm", "flags": {} },
            "location": { "id": "loc_bar", "name": "The Static", "description": "A dive bar", "connections": [] },
            "npcs": [],
            "player": { "id": "player_1", "name": "Rill", "inventory": [], "currency": 20, "gems": 1 },
            "economy": { "currency_name": "creds", "gem_name": "shards", "currency_rules": "" }
        }))
        .unwrap();
        assert!(response.choices.is_none());
    }

    #[test]
    fn action_response_keeps_semantic_failures() {
        let response: ActionResponse = serde_json::from_value(serde_json::json!({
            "success": false,
            "narrative": "Nothing happens.",
            "mood": "calm"
        }))
        .unwrap();
        assert!(!response.success);
        assert_eq!(response.narrative, "Nothing happens.");
    }

    #[test]
    fn malformed_body_is_an_error_not_a_default() {
        let result: Result<TalkResponse, _> = serde_json::from_value(serde_json::json!({
            "npc_name": "Vex"
        }));
        assert!(result.is_err());
    }
}
