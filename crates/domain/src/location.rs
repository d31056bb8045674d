//! The current scene.

use serde::{Deserialize, Serialize};

use crate::ids::LocationId;

/// The location the player currently occupies.
///
/// Replaced wholesale together with [`crate::WorldState`] on every sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    /// Background image reference, resolved by the presentation layer.
    #[serde(default)]
    pub background_url: Option<String>,
    /// Outgoing connections to other locations.
    #[serde(default)]
    pub connections: Vec<LocationId>,
}
