//! Game phase discriminators.

use serde::{Deserialize, Serialize};

/// Page-level phase, owned by the session flow rather than the store.
///
/// `Checking` is the entry state. `Playing` and `Error` are the only
/// states with user-visible steady behavior; `Error` leaves via a
/// user-initiated retry or reset, never automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Checking,
    AvatarSelect,
    Loading,
    Playing,
    Error,
}

/// Store-level mode flag for the new-game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    #[default]
    Playing,
    NewGame,
}
