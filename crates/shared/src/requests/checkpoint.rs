use serde::{Deserialize, Serialize};

use reverie_domain::{PlayerId, WorldId};

/// Request a manual save-game checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCheckpointRequest {
    pub world_id: WorldId,
    pub player_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
