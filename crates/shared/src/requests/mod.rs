//! Request payloads sent to the backend.

pub mod admin;
pub mod checkpoint;
pub mod choice;
pub mod npc;

pub use admin::{
    CharacterTemplateUpsert, LocationTemplateUpsert, LoginRequest, SelectAvatarRequest,
    UpdateWorldRulesRequest,
};
pub use checkpoint::SaveCheckpointRequest;
pub use choice::{CustomActionRequest, SelectChoiceRequest};
pub use npc::TalkRequest;
