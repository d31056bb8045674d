//! Reverie domain vocabulary.
//!
//! Client-side representations of server-authoritative data: the
//! client never derives or persists these independently, it caches
//! what the backend returns.

pub mod character;
pub mod checkpoint;
pub mod dialog;
pub mod ids;
pub mod location;
pub mod narrative;
pub mod phase;
pub mod world;

pub use character::{Npc, Player, StagePosition};
pub use checkpoint::Checkpoint;
pub use dialog::{DialogRole, DialogTurn};
pub use ids::{CheckpointId, ChoiceId, LocationId, NpcId, PlayerId, TemplateId, WorldId};
pub use location::Location;
pub use narrative::{Choice, ChoiceSet, GameEvent};
pub use phase::{GamePhase, SessionMode};
pub use world::{EconomyInfo, WorldState};
