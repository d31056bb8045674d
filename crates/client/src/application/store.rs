//! Game state store.
//!
//! Single source of truth for client-visible game state. All backend
//! interaction is sequenced through the command methods below; callers
//! read through [`GameStore::state`] and never mutate directly.
//!
//! Two failure classes exist (and stay separate): user-action failures
//! land in [`GameState::error`] for the UI to show, while background
//! resync failures in [`GameStore::refresh_state`] are only logged and
//! leave the last good state in place.

use reverie_domain::{
    Checkpoint, CheckpointId, ChoiceId, ChoiceSet, DialogTurn, EconomyInfo, GameEvent, Location,
    Npc, Player, PlayerId, SessionMode, WorldId, WorldState,
};
use reverie_shared::{
    CustomActionRequest, EventsResponse, SaveCheckpointRequest, SelectChoiceRequest, TalkRequest,
    WorldStateResponse,
};

use crate::application::api::{GameApi, DEFAULT_EVENT_LIMIT};
use crate::ports::outbound::ApiError;

/// Rejection from the store's own sequencing rules, as opposed to a
/// backend failure (which lands in [`GameState::error`] instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Another narrative-advancing action is already in flight.
    #[error("another action is already in flight")]
    Busy,
}

/// Client-visible game state.
///
/// Every entity is a cache of server-authoritative data, replaced on
/// sync; only the dialog history and the optimistic narrative updates
/// originate client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub is_loading: bool,
    pub error: Option<String>,

    pub world_id: Option<WorldId>,
    pub player_id: Option<PlayerId>,
    pub world: Option<WorldState>,
    pub location: Option<Location>,
    pub npcs: Vec<Npc>,
    pub player: Option<Player>,
    pub economy: Option<EconomyInfo>,

    pub choices: Option<ChoiceSet>,
    pub events: Vec<GameEvent>,
    pub current_narrative: String,
    pub is_processing: bool,

    /// Invariant: at most one active conversation at a time.
    pub talking_to_npc: Option<Npc>,
    pub dialog_history: Vec<DialogTurn>,

    pub mode: SessionMode,
}

impl GameState {
    fn new() -> Self {
        Self {
            is_loading: true,
            error: None,
            world_id: None,
            player_id: None,
            world: None,
            location: None,
            npcs: Vec::new(),
            player: None,
            economy: None,
            choices: None,
            events: Vec::new(),
            current_narrative: String::new(),
            is_processing: false,
            talking_to_npc: None,
            dialog_history: Vec::new(),
            mode: SessionMode::Playing,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The store: owns the state and sequences all backend calls.
pub struct GameStore {
    api: GameApi,
    state: GameState,
}

impl GameStore {
    pub fn new(api: GameApi) -> Self {
        Self {
            api,
            state: GameState::new(),
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Initialize (or re-initialize) the session.
    ///
    /// Safe to call again after a failure; a retry starts from the
    /// same clean slate. Backend failures land in `state.error`.
    pub async fn init_game(&mut self, world_id: WorldId, player_id: PlayerId) {
        self.state.is_loading = true;
        self.state.error = None;
        self.state.world_id = Some(world_id.clone());
        self.state.player_id = Some(player_id.clone());

        match self.fetch_snapshot(&world_id, &player_id).await {
            Ok((snapshot, events)) => {
                self.state.current_narrative = snapshot
                    .choices
                    .as_ref()
                    .map(|c| c.narrative.clone())
                    .unwrap_or_default();
                self.apply_snapshot(snapshot, events);
                self.state.is_loading = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "game init failed");
                self.state.is_loading = false;
                self.state.error = Some(e.to_string());
            }
        }
    }

    /// Select one of the currently offered choices.
    ///
    /// No-op without an active session or an open decision point. The
    /// returned narrative is applied immediately; the full state
    /// refresh that follows is best-effort.
    pub async fn select_choice(&mut self, choice_id: ChoiceId) -> Result<(), StoreError> {
        let (Some(world_id), Some(player_id), Some(choices)) = (
            self.state.world_id.clone(),
            self.state.player_id.clone(),
            self.state.choices.clone(),
        ) else {
            return Ok(());
        };
        self.guard_idle()?;

        self.state.is_processing = true;
        let request = SelectChoiceRequest {
            world_id,
            player_id,
            choice_id,
            // The server may need the original option text, so the
            // whole current choice list travels along.
            choices_context: choices.choices,
        };

        match self.api.select_choice(&request).await {
            Ok(result) => {
                self.state.current_narrative = result.narrative;
                self.state.is_processing = false;
                self.refresh_state().await;
            }
            Err(e) => {
                self.state.is_processing = false;
                self.state.error = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// Submit a free-text action.
    ///
    /// A semantic rejection (`success = false`) still shows its
    /// narrative ("you can't do that") but skips the state refresh:
    /// nothing changed server-side.
    pub async fn submit_custom_action(&mut self, action: impl Into<String>) -> Result<(), StoreError> {
        let (Some(world_id), Some(player_id)) =
            (self.state.world_id.clone(), self.state.player_id.clone())
        else {
            return Ok(());
        };
        self.guard_idle()?;

        self.state.is_processing = true;
        let request = CustomActionRequest {
            world_id,
            player_id,
            action_text: action.into(),
        };

        match self.api.custom_action(&request).await {
            Ok(result) => {
                self.state.current_narrative = result.narrative;
                self.state.is_processing = false;
                if result.success {
                    self.refresh_state().await;
                }
            }
            Err(e) => {
                self.state.is_processing = false;
                self.state.error = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// Begin a conversation with an NPC. Pure local transition.
    pub fn start_talking_to(&mut self, npc: &Npc) {
        self.state.dialog_history = match &npc.first_message {
            Some(first) => vec![DialogTurn::npc(first.clone())],
            None => Vec::new(),
        };
        self.state.talking_to_npc = Some(npc.clone());
    }

    /// Send one player message in the active conversation.
    ///
    /// The player turn is appended optimistically before the call and
    /// is kept even if the call fails - the divergence lasts until the
    /// next successful refresh. On success the matching NPC's emotion
    /// and relationship are patched in place rather than refetching
    /// the scene, so per-NPC data the talk endpoint does not return
    /// (position, portrait) survives.
    pub async fn send_message(&mut self, message: impl Into<String>) -> Result<(), StoreError> {
        let (Some(world_id), Some(player_id), Some(npc)) = (
            self.state.world_id.clone(),
            self.state.player_id.clone(),
            self.state.talking_to_npc.clone(),
        ) else {
            return Ok(());
        };
        self.guard_idle()?;

        let message = message.into();
        self.state.dialog_history.push(DialogTurn::player(message.clone()));
        self.state.is_processing = true;

        let request = TalkRequest {
            world_id,
            player_id,
            npc_id: npc.id.clone(),
            message,
        };

        match self.api.talk(&request).await {
            Ok(result) => {
                self.state.dialog_history.push(DialogTurn::npc(result.response));
                self.state.is_processing = false;
                if let Some(entry) = self.state.npcs.iter_mut().find(|n| n.id == npc.id) {
                    entry.emotion = result.emotion;
                    entry.relationship = result.relationship;
                }
            }
            Err(e) => {
                self.state.is_processing = false;
                self.state.error = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// End the active conversation, unconditionally.
    pub fn end_conversation(&mut self) {
        self.state.talking_to_npc = None;
        self.state.dialog_history.clear();
    }

    /// Re-fetch world state and events, overwriting all server-owned
    /// fields. No-op without a session. Failures are logged, never
    /// surfaced: a stale screen beats an error screen for a resync.
    pub async fn refresh_state(&mut self) {
        let (Some(world_id), Some(player_id)) =
            (self.state.world_id.clone(), self.state.player_id.clone())
        else {
            return;
        };

        match self.fetch_snapshot(&world_id, &player_id).await {
            Ok((snapshot, events)) => self.apply_snapshot(snapshot, events),
            Err(e) => tracing::error!(error = %e, "failed to refresh state"),
        }
    }

    /// Request a manual checkpoint. Fire-and-forget: a failure sets
    /// `error` but touches nothing else.
    pub async fn save_checkpoint(&mut self, description: Option<String>) {
        let (Some(world_id), Some(player_id)) =
            (self.state.world_id.clone(), self.state.player_id.clone())
        else {
            return;
        };

        let request = SaveCheckpointRequest {
            world_id,
            player_id,
            description,
        };
        if let Err(e) = self.api.save_checkpoint(&request).await {
            self.state.error = Some(e.to_string());
        }
    }

    /// List available checkpoints, returned directly to the caller and
    /// never stored. Failures yield an empty list and a log line; the
    /// listing is best-effort by contract.
    pub async fn list_checkpoints(&self) -> Vec<Checkpoint> {
        let (Some(world_id), Some(player_id)) =
            (self.state.world_id.clone(), self.state.player_id.clone())
        else {
            return Vec::new();
        };

        match self.api.list_checkpoints(&world_id, &player_id).await {
            Ok(result) => result.checkpoints,
            Err(e) => {
                tracing::error!(error = %e, "failed to list checkpoints");
                Vec::new()
            }
        }
    }

    /// Restore a checkpoint, then force a full resync by re-running
    /// [`GameStore::init_game`] with the existing session identifiers.
    pub async fn load_checkpoint(&mut self, checkpoint_id: &CheckpointId) {
        self.state.is_loading = true;
        self.state.error = None;

        match self.api.load_checkpoint(checkpoint_id).await {
            Ok(result) if result.success => {
                if let (Some(world_id), Some(player_id)) =
                    (self.state.world_id.clone(), self.state.player_id.clone())
                {
                    self.init_game(world_id, player_id).await;
                } else {
                    self.state.is_loading = false;
                }
            }
            Ok(_) => {
                self.state.is_loading = false;
                self.state.error = Some("Failed to restore checkpoint".to_string());
            }
            Err(e) => {
                self.state.is_loading = false;
                self.state.error = Some(e.to_string());
            }
        }
    }

    /// Reset all session fields and enter the new-game mode. Purely
    /// local; actual new-game creation is an external flow.
    pub fn start_new_game(&mut self) {
        self.state = GameState {
            is_loading: false,
            mode: SessionMode::NewGame,
            ..GameState::new()
        };
    }

    fn guard_idle(&self) -> Result<(), StoreError> {
        if self.state.is_processing || self.state.is_loading {
            return Err(StoreError::Busy);
        }
        Ok(())
    }

    async fn fetch_snapshot(
        &self,
        world_id: &WorldId,
        player_id: &PlayerId,
    ) -> Result<(WorldStateResponse, EventsResponse), ApiError> {
        let snapshot = self.api.world_state(world_id, player_id).await?;
        let events = self.api.events(world_id, DEFAULT_EVENT_LIMIT).await?;
        Ok((snapshot, events))
    }

    fn apply_snapshot(&mut self, snapshot: WorldStateResponse, events: EventsResponse) {
        self.state.world = Some(snapshot.world);
        self.state.location = Some(snapshot.location);
        self.state.npcs = snapshot.npcs;
        self.state.player = Some(snapshot.player);
        self.state.economy = Some(snapshot.economy);
        self.state.choices = snapshot.choices;
        self.state.events = events.events;
    }
}
