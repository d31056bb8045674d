//! Transient one-on-one conversation state.

use serde::{Deserialize, Serialize};

/// Who spoke a dialog turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogRole {
    Player,
    Npc,
}

/// One exchange in an NPC conversation.
///
/// Held only in the in-memory history of the active conversation and
/// discarded when the conversation ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogTurn {
    pub role: DialogRole,
    pub content: String,
}

impl DialogTurn {
    pub fn player(content: impl Into<String>) -> Self {
        Self {
            role: DialogRole::Player,
            content: content.into(),
        }
    }

    pub fn npc(content: impl Into<String>) -> Self {
        Self {
            role: DialogRole::Npc,
            content: content.into(),
        }
    }
}
