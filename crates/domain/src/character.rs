//! Characters present in the scene: NPCs and the player's avatar.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{NpcId, PlayerId};

/// Horizontal display slot for a character portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StagePosition {
    Left,
    #[default]
    Center,
    Right,
}

impl StagePosition {
    pub fn display_name(&self) -> &'static str {
        match self {
            StagePosition::Left => "Left",
            StagePosition::Center => "Center",
            StagePosition::Right => "Right",
        }
    }
}

impl fmt::Display for StagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for StagePosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(StagePosition::Left),
            "center" => Ok(StagePosition::Center),
            "right" => Ok(StagePosition::Right),
            _ => Err(format!("Unknown stage position: {}", s)),
        }
    }
}

/// A non-player character present in the current scene.
///
/// Replaced on refresh; `emotion`/`relationship` are locally patched
/// right after a dialog turn and overwritten by the next refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub description: String,
    /// Free-text emotion tag chosen by the server ("wary", "amused", ...).
    pub emotion: String,
    /// Relationship score toward the player.
    pub relationship: i32,
    #[serde(default)]
    pub portrait_url: Option<String>,
    /// Opening line used to seed a conversation, if the NPC has one.
    #[serde(default)]
    pub first_message: Option<String>,
    /// Not all endpoints return a position; defaults to center.
    #[serde(default)]
    pub position: StagePosition,
}

/// The user's avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Ordered list of item identifiers; interpretation is server-side.
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub portrait_url: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    pub currency: i64,
    pub gems: i64,
    #[serde(default)]
    pub position: StagePosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_position_parse() {
        assert_eq!("left".parse::<StagePosition>().unwrap(), StagePosition::Left);
        assert_eq!("CENTER".parse::<StagePosition>().unwrap(), StagePosition::Center);
        assert!("offstage".parse::<StagePosition>().is_err());
    }

    #[test]
    fn npc_parses_without_position_or_first_message() {
        let npc: Npc = serde_json::from_value(serde_json::json!({
            "id": "npc_1",
            "name": "Vex",
            "description": "A fixer with tired eyes",
            "emotion": "neutral",
            "relationship": 0
        }))
        .unwrap();
        assert_eq!(npc.position, StagePosition::Center);
        assert!(npc.first_message.is_none());
    }
}
