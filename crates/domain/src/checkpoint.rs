//! Save-game records.

use serde::{Deserialize, Serialize};

use crate::ids::CheckpointId;

/// A save-game record, listed on demand and never cached beyond the
/// caller's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: CheckpointId,
    pub description: String,
    /// RFC 3339 creation time as issued by the server.
    pub created_at: String,
    /// True for server-initiated auto-saves.
    pub is_auto: bool,
}
