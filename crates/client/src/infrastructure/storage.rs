//! Storage adapters: file-per-key persistence and an in-memory variant.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::ports::outbound::StorageProvider;

/// File-per-key storage under the platform config directory.
///
/// The desktop equivalent of browser localStorage. Write failures are
/// logged and swallowed: losing a cached token or flag only costs the
/// user a re-login.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the platform config directory for Reverie,
    /// falling back to a dot-directory in the working directory when
    /// no platform directory is available.
    pub fn new() -> Self {
        let dir = ProjectDirs::from("", "", "reverie")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".reverie"));
        Self { dir }
    }

    /// Storage rooted at an explicit directory (tests).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for FileStorage {
    fn save(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!(error = %e, key, "failed to create storage directory");
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            tracing::warn!(error = %e, key, "failed to persist storage value");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn remove(&self, key: &str) {
        if let Err(e) = std::fs::remove_file(self.path_for(key)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, key, "failed to remove storage value");
            }
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|values| values.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path());

        assert_eq!(storage.load("token"), None);
        storage.save("token", "abc123");
        assert_eq!(storage.load("token"), Some("abc123".to_string()));
        storage.remove("token");
        assert_eq!(storage.load("token"), None);
        // Removing a missing key is quiet.
        storage.remove("token");
    }

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        storage.save("flag", "true");
        assert_eq!(storage.load("flag"), Some("true".to_string()));
        storage.remove("flag");
        assert_eq!(storage.load("flag"), None);
    }
}
