//! Reverie client.
//!
//! The client-side orchestration layer for the Reverie backend: an
//! object-safe HTTP port with a reqwest adapter, the game-state store
//! that sequences all backend interactions, the admin API client, and
//! the page-level session flow. Presentation layers consume the store
//! through its read-only state view and command methods; they never
//! mutate state directly.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

pub use application::{AdminApi, AdminTokenStore, GameApi, GameState, GameStore, SessionFlow, StoreError};
pub use config::ClientConfig;
pub use infrastructure::{FileStorage, HttpApiClient, MemoryStorage};
pub use ports::outbound::{storage_keys, ApiError, RawApiPort, StorageProvider, TokenProvider};
