//! Typed gameplay API over the raw HTTP port.
//!
//! The raw port is object-safe and JSON-level; this wrapper does the
//! serde conversions so the store works with schema types only. A body
//! that does not match its schema surfaces as [`ApiError::Parse`].

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use reverie_domain::{CheckpointId, PlayerId, WorldId};
use reverie_shared::{
    ActionResponse, CheckpointListResponse, CheckpointRestoredResponse, CheckpointSavedResponse,
    CustomActionRequest, EventsResponse, SaveCheckpointRequest, SelectChoiceRequest, TalkRequest,
    TalkResponse, WorldStateResponse,
};

use crate::ports::outbound::{ApiError, RawApiPort};

/// Event log page size requested on every sync.
pub const DEFAULT_EVENT_LIMIT: usize = 20;

/// Typed wrapper for the unauthenticated gameplay endpoints.
#[derive(Clone)]
pub struct GameApi {
    raw: Arc<dyn RawApiPort>,
}

impl GameApi {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let value = self.raw.post_json(path, &body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch the full world snapshot for one player session.
    pub async fn world_state(
        &self,
        world_id: &WorldId,
        player_id: &PlayerId,
    ) -> Result<WorldStateResponse, ApiError> {
        self.get(&format!(
            "/api/world/{}/state?player_id={}",
            world_id, player_id
        ))
        .await
    }

    /// Fetch the most recent event log entries.
    pub async fn events(&self, world_id: &WorldId, limit: usize) -> Result<EventsResponse, ApiError> {
        self.get(&format!("/api/world/{}/events?limit={}", world_id, limit))
            .await
    }

    pub async fn select_choice(
        &self,
        request: &SelectChoiceRequest,
    ) -> Result<ActionResponse, ApiError> {
        self.post("/api/choice/select", request).await
    }

    pub async fn custom_action(
        &self,
        request: &CustomActionRequest,
    ) -> Result<ActionResponse, ApiError> {
        self.post("/api/choice/custom", request).await
    }

    pub async fn talk(&self, request: &TalkRequest) -> Result<TalkResponse, ApiError> {
        self.post("/api/npc/talk", request).await
    }

    pub async fn save_checkpoint(
        &self,
        request: &SaveCheckpointRequest,
    ) -> Result<CheckpointSavedResponse, ApiError> {
        self.post("/api/checkpoint/save", request).await
    }

    pub async fn list_checkpoints(
        &self,
        world_id: &WorldId,
        player_id: &PlayerId,
    ) -> Result<CheckpointListResponse, ApiError> {
        self.get(&format!(
            "/api/checkpoint/list?world_id={}&player_id={}",
            world_id, player_id
        ))
        .await
    }

    pub async fn load_checkpoint(
        &self,
        checkpoint_id: &CheckpointId,
    ) -> Result<CheckpointRestoredResponse, ApiError> {
        let value = self
            .raw
            .post_empty(&format!("/api/checkpoint/{}/load", checkpoint_id))
            .await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
