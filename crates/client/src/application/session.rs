//! Session bootstrap: avatar selection gate and phase transitions.
//!
//! Wraps the store with the startup state machine. A persisted flag
//! records that the player has already picked an avatar; sessions with
//! the flag go straight to initialization, everything else lands on
//! the avatar picker first.

use std::sync::Arc;

use reverie_domain::{GamePhase, PlayerId, TemplateId, WorldId};
use reverie_shared::SelectAvatarRequest;

use crate::application::admin::AdminApi;
use crate::application::store::GameStore;
use crate::ports::outbound::{storage_keys, StorageProvider};

/// Startup and lifecycle coordinator for one play session.
pub struct SessionFlow {
    store: GameStore,
    admin: AdminApi,
    storage: Arc<dyn StorageProvider>,
    world_id: WorldId,
    player_id: PlayerId,
    phase: GamePhase,
    init_error: Option<String>,
}

impl SessionFlow {
    pub fn new(
        store: GameStore,
        admin: AdminApi,
        storage: Arc<dyn StorageProvider>,
        world_id: WorldId,
        player_id: PlayerId,
    ) -> Self {
        Self {
            store,
            admin,
            storage,
            world_id,
            player_id,
            phase: GamePhase::Checking,
            init_error: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GameStore {
        &mut self.store
    }

    /// Route the session: returning players (flag set) initialize
    /// immediately, first-time players go to the avatar picker.
    pub async fn start(&mut self) {
        self.phase = GamePhase::Checking;
        if self.storage.load(storage_keys::AVATAR_SELECTED).is_some() {
            self.try_init().await;
        } else {
            self.phase = GamePhase::AvatarSelect;
        }
    }

    /// Pick an avatar for this session, then initialize.
    ///
    /// The persisted flag is only written after the server accepted
    /// the selection, so a failed pick re-prompts on the next launch.
    /// A failed selection enters the error phase; the picker is only
    /// reached again through a user-initiated retry or reset.
    pub async fn select_avatar(&mut self, template_id: TemplateId, player_name: impl Into<String>) {
        self.init_error = None;
        let request = SelectAvatarRequest {
            template_id,
            player_name: player_name.into(),
            world_id: self.world_id.clone(),
            player_id: self.player_id.clone(),
        };

        match self.admin.select_avatar(&request).await {
            Ok(response) if response.success => {
                self.storage.save(storage_keys::AVATAR_SELECTED, "true");
                self.try_init().await;
            }
            Ok(_) => {
                self.phase = GamePhase::Error;
                self.init_error = Some("Avatar selection was rejected".to_string());
            }
            Err(e) => {
                self.phase = GamePhase::Error;
                self.init_error = Some(e.to_string());
            }
        }
    }

    /// Retry after a failed initialization. A second failure drops the
    /// persisted flag and falls back to the avatar picker, the one
    /// recovery path that always works.
    pub async fn retry(&mut self) {
        self.try_init().await;
        if self.phase == GamePhase::Error {
            self.storage.remove(storage_keys::AVATAR_SELECTED);
            self.phase = GamePhase::AvatarSelect;
        }
    }

    /// Abandon the current session: clear the avatar flag, reset the
    /// store and return to the picker.
    pub fn reset(&mut self) {
        self.storage.remove(storage_keys::AVATAR_SELECTED);
        self.store.start_new_game();
        self.init_error = None;
        self.phase = GamePhase::AvatarSelect;
    }

    async fn try_init(&mut self) {
        self.phase = GamePhase::Loading;
        self.init_error = None;
        self.store
            .init_game(self.world_id.clone(), self.player_id.clone())
            .await;

        match &self.store.state().error {
            Some(error) => {
                self.init_error = Some(error.clone());
                self.phase = GamePhase::Error;
            }
            None => self.phase = GamePhase::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::application::admin::AdminTokenStore;
    use crate::application::api::GameApi;
    use crate::infrastructure::MemoryStorage;
    use crate::ports::outbound::{ApiError, MockRawApiPort};

    fn world_state_body() -> Value {
        json!({
            "world": { "id": "world_1", "time": 0, "name": "Neon City", "mood": "calm", "flags": {} },
            "location": { "id": "loc_bar", "name": "The Static", "description": "A dive bar", "connections": [] },
            "npcs": [],
            "player": { "id": "player_1", "name": "Rill", "inventory": [], "currency": 20, "gems": 1 },
            "economy": { "currency_name": "creds", "gem_name": "shards", "currency_rules": "" }
        })
    }

    fn expect_snapshot(mock: &mut MockRawApiPort) {
        mock.expect_get_json()
            .withf(|path| path.starts_with("/api/world/world_1/state"))
            .returning(|_| Ok(world_state_body()));
        mock.expect_get_json()
            .withf(|path| path.starts_with("/api/world/world_1/events"))
            .returning(|_| Ok(json!({ "events": [] })));
    }

    fn flow_with(mock: MockRawApiPort, storage: Arc<MemoryStorage>) -> SessionFlow {
        let raw: Arc<dyn crate::ports::outbound::RawApiPort> = Arc::new(mock);
        let store = GameStore::new(GameApi::new(raw.clone()));
        let admin = AdminApi::new(
            raw,
            Arc::new(AdminTokenStore::new(storage.as_ref())),
            storage.clone(),
        );
        SessionFlow::new(store, admin, storage, "world_1".into(), "player_1".into())
    }

    #[tokio::test]
    async fn first_launch_lands_on_avatar_picker() {
        // No expectations: routing alone must not touch the network.
        let mut flow = flow_with(MockRawApiPort::new(), Arc::new(MemoryStorage::new()));
        assert_eq!(flow.phase(), GamePhase::Checking);

        flow.start().await;
        assert_eq!(flow.phase(), GamePhase::AvatarSelect);
    }

    #[tokio::test]
    async fn returning_player_initializes_directly() {
        let mut mock = MockRawApiPort::new();
        expect_snapshot(&mut mock);
        let storage = Arc::new(MemoryStorage::new());
        storage.save(storage_keys::AVATAR_SELECTED, "true");
        let mut flow = flow_with(mock, storage);

        flow.start().await;

        assert_eq!(flow.phase(), GamePhase::Playing);
        assert_eq!(flow.init_error(), None);
        assert!(flow.store().state().world.is_some());
    }

    #[tokio::test]
    async fn accepted_avatar_persists_flag_and_initializes() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_json()
            .withf(|path, body| {
                path == "/api/admin/avatar/select" && body["template_id"] == "tmpl_1"
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "success": true,
                    "player": { "id": "player_1", "name": "Rill" }
                }))
            });
        expect_snapshot(&mut mock);
        let storage = Arc::new(MemoryStorage::new());
        let mut flow = flow_with(mock, storage.clone());

        flow.select_avatar("tmpl_1".into(), "Rill").await;

        assert_eq!(flow.phase(), GamePhase::Playing);
        assert_eq!(
            storage.load(storage_keys::AVATAR_SELECTED),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn failed_avatar_selection_enters_error_phase_without_flag() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_json()
            .times(1)
            .returning(|_, _| Err(ApiError::Transport("connection reset".to_string())));
        let storage = Arc::new(MemoryStorage::new());
        let mut flow = flow_with(mock, storage.clone());

        flow.select_avatar("tmpl_1".into(), "Rill").await;

        assert_eq!(flow.phase(), GamePhase::Error);
        assert!(flow.init_error().is_some());
        assert_eq!(storage.load(storage_keys::AVATAR_SELECTED), None);
    }

    #[tokio::test]
    async fn failed_retry_falls_back_to_avatar_picker() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Err(ApiError::Transport("connection refused".to_string())));
        let storage = Arc::new(MemoryStorage::new());
        storage.save(storage_keys::AVATAR_SELECTED, "true");
        let mut flow = flow_with(mock, storage.clone());

        flow.start().await;
        assert_eq!(flow.phase(), GamePhase::Error);
        assert!(flow.init_error().is_some());

        flow.retry().await;
        assert_eq!(flow.phase(), GamePhase::AvatarSelect);
        assert_eq!(storage.load(storage_keys::AVATAR_SELECTED), None);
    }

    #[tokio::test]
    async fn reset_clears_flag_and_session() {
        let mut mock = MockRawApiPort::new();
        expect_snapshot(&mut mock);
        let storage = Arc::new(MemoryStorage::new());
        storage.save(storage_keys::AVATAR_SELECTED, "true");
        let mut flow = flow_with(mock, storage.clone());
        flow.start().await;
        assert_eq!(flow.phase(), GamePhase::Playing);

        flow.reset();

        assert_eq!(flow.phase(), GamePhase::AvatarSelect);
        assert_eq!(storage.load(storage_keys::AVATAR_SELECTED), None);
        assert!(flow.store().state().world.is_none());
    }
}
