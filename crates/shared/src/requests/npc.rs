use serde::{Deserialize, Serialize};

use reverie_domain::{NpcId, PlayerId, WorldId};

/// One player message in an NPC conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkRequest {
    pub world_id: WorldId,
    pub player_id: PlayerId,
    pub npc_id: NpcId,
    pub message: String,
}
