//! Admin console API: authentication, template management, uploads.
//!
//! Every call goes out with the cached bearer token (attached by the
//! HTTP adapter through [`TokenProvider`]); a 401 on any call drops the
//! cached token from memory and storage so the next attempt starts from
//! a clean logged-out state.

use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};

use reverie_domain::{EconomyInfo, TemplateId, WorldId};
use reverie_shared::{
    AvatarListResponse, AvatarSelectedResponse, BackgroundUploadedResponse, CharacterListResponse,
    CharacterTemplate, CharacterTemplateUpsert, CreatedResponse, ImportCardResponse,
    LocationListResponse, LocationTemplate, LocationTemplateUpsert, LoginRequest, LoginResponse,
    OkResponse, PortraitUploadedResponse, SelectAvatarRequest, UpdateWorldRulesRequest,
    WorldRulesResponse,
};

use crate::ports::outbound::{storage_keys, ApiError, RawApiPort, StorageProvider, TokenProvider};

/// In-memory admin token cache, seeded from and mirrored to storage.
///
/// Shared between [`AdminApi`] (which sets and clears it) and the HTTP
/// adapter (which reads it per request).
pub struct AdminTokenStore {
    token: Mutex<Option<String>>,
}

impl AdminTokenStore {
    /// Seed the cache from the persisted token, if one exists.
    pub fn new(storage: &dyn StorageProvider) -> Self {
        Self {
            token: Mutex::new(storage.load(storage_keys::ADMIN_TOKEN)),
        }
    }

    pub fn empty() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    fn set(&self, token: String) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

impl TokenProvider for AdminTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }
}

/// Typed wrapper for the authenticated admin endpoints.
#[derive(Clone)]
pub struct AdminApi {
    raw: Arc<dyn RawApiPort>,
    tokens: Arc<AdminTokenStore>,
    storage: Arc<dyn StorageProvider>,
}

impl AdminApi {
    pub fn new(
        raw: Arc<dyn RawApiPort>,
        tokens: Arc<AdminTokenStore>,
        storage: Arc<dyn StorageProvider>,
    ) -> Self {
        Self {
            raw,
            tokens,
            storage,
        }
    }

    /// Whether a token is currently cached. Validity is only known
    /// after the next call; a stale token surfaces as a 401 then.
    pub fn is_logged_in(&self) -> bool {
        self.tokens.token().is_some()
    }

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------

    /// Exchange the admin password for a bearer token and cache it.
    pub async fn login(&self, password: impl Into<String>) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            password: password.into(),
        };
        let response: LoginResponse = self.post("/api/admin/login", &request).await?;
        if let Some(token) = response.token.as_ref().filter(|_| response.success) {
            self.tokens.set(token.clone());
            self.storage.save(storage_keys::ADMIN_TOKEN, token);
        }
        Ok(response)
    }

    /// Invalidate the token server-side, then drop the local cache.
    ///
    /// Best-effort: the local cache is cleared regardless of the
    /// request outcome, so a dead backend cannot trap the UI in a
    /// logged-in state.
    pub async fn logout(&self) {
        if let Err(e) = self.raw.post_empty("/api/admin/logout").await {
            tracing::warn!(error = %e, "server-side logout failed");
        }
        self.invalidate_token();
    }

    fn invalidate_token(&self) {
        self.tokens.clear();
        self.storage.remove(storage_keys::ADMIN_TOKEN);
    }

    /// A 401 means the cached token is dead; drop it so the UI falls
    /// back to the login screen instead of retrying forever.
    fn check_auth<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized) = &result {
            tracing::info!("admin token rejected, clearing cached credential");
            self.invalidate_token();
        }
        result
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let result = self.raw.get_json(path).await;
        let value = self.check_auth(result)?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let result = self.raw.post_json(path, &body).await;
        let value = self.check_auth(result)?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let result = self.raw.put_json(path, &body).await;
        let value = self.check_auth(result)?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn delete_at<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let result = self.raw.delete(path).await;
        let value = self.check_auth(result)?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        let result = self.raw.post_file(path, field, file_name, bytes).await;
        let value = self.check_auth(result)?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    // -------------------------------------------------------------------------
    // Character templates
    // -------------------------------------------------------------------------

    pub async fn list_characters(&self) -> Result<CharacterListResponse, ApiError> {
        self.get("/api/admin/characters").await
    }

    pub async fn get_character(&self, id: &TemplateId) -> Result<CharacterTemplate, ApiError> {
        self.get(&format!("/api/admin/characters/{}", id)).await
    }

    pub async fn create_character(
        &self,
        template: &CharacterTemplateUpsert,
    ) -> Result<CreatedResponse, ApiError> {
        self.post("/api/admin/characters", template).await
    }

    pub async fn update_character(
        &self,
        id: &TemplateId,
        template: &CharacterTemplateUpsert,
    ) -> Result<OkResponse, ApiError> {
        self.put(&format!("/api/admin/characters/{}", id), template)
            .await
    }

    pub async fn delete_character(&self, id: &TemplateId) -> Result<OkResponse, ApiError> {
        self.delete_at(&format!("/api/admin/characters/{}", id))
            .await
    }

    /// Import a PNG character card (embedded JSON metadata).
    pub async fn import_character_card(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ImportCardResponse, ApiError> {
        self.upload("/api/admin/characters/import", "file", file_name, bytes)
            .await
    }

    /// Export a character template as a PNG card.
    pub async fn export_character_card(&self, id: &TemplateId) -> Result<Vec<u8>, ApiError> {
        let result = self
            .raw
            .get_bytes(&format!("/api/admin/characters/{}/export", id))
            .await;
        self.check_auth(result)
    }

    pub async fn upload_character_portrait(
        &self,
        id: &TemplateId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<PortraitUploadedResponse, ApiError> {
        self.upload(
            &format!("/api/admin/characters/{}/portrait", id),
            "file",
            file_name,
            bytes,
        )
        .await
    }

    // -------------------------------------------------------------------------
    // Location templates
    // -------------------------------------------------------------------------

    pub async fn list_locations(&self) -> Result<LocationListResponse, ApiError> {
        self.get("/api/admin/locations").await
    }

    pub async fn get_location(&self, id: &TemplateId) -> Result<LocationTemplate, ApiError> {
        self.get(&format!("/api/admin/locations/{}", id)).await
    }

    pub async fn create_location(
        &self,
        template: &LocationTemplateUpsert,
    ) -> Result<CreatedResponse, ApiError> {
        self.post("/api/admin/locations", template).await
    }

    pub async fn update_location(
        &self,
        id: &TemplateId,
        template: &LocationTemplateUpsert,
    ) -> Result<OkResponse, ApiError> {
        self.put(&format!("/api/admin/locations/{}", id), template)
            .await
    }

    pub async fn delete_location(&self, id: &TemplateId) -> Result<OkResponse, ApiError> {
        self.delete_at(&format!("/api/admin/locations/{}", id))
            .await
    }

    /// Export a location template as a PNG card.
    pub async fn export_location_card(&self, id: &TemplateId) -> Result<Vec<u8>, ApiError> {
        let result = self
            .raw
            .get_bytes(&format!("/api/admin/locations/{}/export", id))
            .await;
        self.check_auth(result)
    }

    pub async fn upload_location_background(
        &self,
        id: &TemplateId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BackgroundUploadedResponse, ApiError> {
        self.upload(
            &format!("/api/admin/locations/{}/background", id),
            "file",
            file_name,
            bytes,
        )
        .await
    }

    // -------------------------------------------------------------------------
    // World rules and economy
    // -------------------------------------------------------------------------

    pub async fn world_rules(&self, world_id: &WorldId) -> Result<WorldRulesResponse, ApiError> {
        self.get(&format!("/api/admin/world/rules?world_id={}", world_id))
            .await
    }

    pub async fn update_world_rules(
        &self,
        world_id: &WorldId,
        rules: Vec<String>,
    ) -> Result<OkResponse, ApiError> {
        self.put(
            &format!("/api/admin/world/rules?world_id={}", world_id),
            &UpdateWorldRulesRequest { rules },
        )
        .await
    }

    pub async fn economy_config(&self, world_id: &WorldId) -> Result<EconomyInfo, ApiError> {
        self.get(&format!("/api/admin/economy?world_id={}", world_id))
            .await
    }

    pub async fn update_economy_config(
        &self,
        world_id: &WorldId,
        config: &EconomyInfo,
    ) -> Result<OkResponse, ApiError> {
        self.put(&format!("/api/admin/economy?world_id={}", world_id), config)
            .await
    }

    // -------------------------------------------------------------------------
    // Avatars
    // -------------------------------------------------------------------------

    /// List character templates flagged as selectable player avatars.
    pub async fn list_avatars(&self) -> Result<AvatarListResponse, ApiError> {
        self.get("/api/admin/avatars").await
    }

    /// Create or replace the player from an avatar template.
    pub async fn select_avatar(
        &self,
        request: &SelectAvatarRequest,
    ) -> Result<AvatarSelectedResponse, ApiError> {
        self.post("/api/admin/avatar/select", request).await
    }
}
