//! Persistent local storage abstraction.
//!
//! Backs the cached admin bearer token and the avatar-selected flag.
//! Failures are absorbed by implementations (logged, not surfaced):
//! losing a cached value only costs the user a re-login or a re-check.

/// Persistent key/value storage (browser localStorage equivalent).
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key.
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found.
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key.
    fn remove(&self, key: &str);
}

/// Supplies the bearer token attached to outgoing requests, if any.
///
/// Implemented by the admin token cache; the HTTP adapter asks per
/// request so a login or a 401 invalidation takes effect immediately.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Storage key constants.
///
/// Kept with the port because they define the contract for what keys
/// are used across the application.
pub mod storage_keys {
    pub const ADMIN_TOKEN: &str = "reverie_admin_token";
    pub const AVATAR_SELECTED: &str = "reverie_avatar_selected";
}
