//! Application layer - the typed API surface and the state
//! orchestration built on top of it.

pub mod admin;
pub mod api;
pub mod session;
pub mod store;

pub use admin::{AdminApi, AdminTokenStore};
pub use api::GameApi;
pub use session::SessionFlow;
pub use store::{GameState, GameStore, StoreError};
