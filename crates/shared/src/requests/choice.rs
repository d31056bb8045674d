use serde::{Deserialize, Serialize};

use reverie_domain::{Choice, ChoiceId, PlayerId, WorldId};

/// Select one of the offered choices.
///
/// The full current choice list travels along as context: the server
/// may need the original option text to interpret the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectChoiceRequest {
    pub world_id: WorldId,
    pub player_id: PlayerId,
    pub choice_id: ChoiceId,
    pub choices_context: Vec<Choice>,
}

/// Submit a free-text action instead of a choice id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomActionRequest {
    pub world_id: WorldId,
    pub player_id: PlayerId,
    pub action_text: String,
}
