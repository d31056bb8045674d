//! Reverie wire formats.
//!
//! Explicit request/response schemas for the backend HTTP API. Every
//! response body is deserialized into one of these records at the API
//! boundary; a body that does not match is a parse error, never a
//! partially-populated value.

pub mod requests;
pub mod responses;

pub use requests::{
    CharacterTemplateUpsert, CustomActionRequest, LocationTemplateUpsert, LoginRequest,
    SaveCheckpointRequest, SelectAvatarRequest, SelectChoiceRequest, TalkRequest,
    UpdateWorldRulesRequest,
};
pub use responses::{
    ActionResponse, AvatarListResponse, AvatarPlayer, AvatarSelectedResponse, AvatarSummary,
    BackgroundUploadedResponse, CharacterListResponse, CharacterTemplate,
    CheckpointListResponse, CheckpointRestoredResponse, CheckpointSavedResponse,
    CreatedResponse, EventsResponse, ImportCardResponse, LocationListResponse, LocationTemplate,
    LoginResponse, OkResponse, PortraitUploadedResponse, StartingLocation, TalkResponse,
    WorldRulesResponse, WorldStateResponse,
};
