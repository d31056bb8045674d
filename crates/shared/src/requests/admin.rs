//! Admin console request payloads.
//!
//! Template upserts mirror the server's partial-update contract: every
//! field is optional and absent fields are left untouched.

use serde::{Deserialize, Serialize};

use reverie_domain::{PlayerId, TemplateId, WorldId};

/// Exchange the admin password for a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Create or update a character template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterTemplateUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_dialogs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_player_avatar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_attributes: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Create or update a location template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationTemplateUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_connections: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_characters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starting_location: Option<bool>,
}

/// Replace the free-text world rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorldRulesRequest {
    pub rules: Vec<String>,
}

/// Create or update the player from an avatar template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectAvatarRequest {
    pub template_id: TemplateId,
    pub player_name: String,
    pub world_id: WorldId,
    pub player_id: PlayerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_omits_absent_fields() {
        let upsert = CharacterTemplateUpsert {
            name: Some("Vex".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&upsert).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "Vex" }));
    }
}
