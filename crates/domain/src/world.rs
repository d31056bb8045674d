//! Shared scene context owned by the server.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::WorldId;

/// Snapshot of the shared world the player is in.
///
/// Fetched on init/refresh and replaced wholesale on every sync; the
/// client never derives or mutates it locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub id: WorldId,
    /// Elapsed in-game time, in server-defined units.
    pub time: u64,
    pub name: String,
    /// Free-text scene mood tag ("tense", "calm", ...).
    pub mood: String,
    /// Server-owned boolean flags (quest progress, toggles).
    #[serde(default)]
    pub flags: HashMap<String, bool>,
}

/// Currency naming and free-text spending rules for the active world.
///
/// Also the payload of the admin economy configuration endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyInfo {
    pub currency_name: String,
    pub gem_name: String,
    /// Free text interpreted server-side; opaque to the client.
    pub currency_rules: String,
}
