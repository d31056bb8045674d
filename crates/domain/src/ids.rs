use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        /// Server-issued opaque identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

// Session identity
define_id!(WorldId);
define_id!(PlayerId);

// Scene contents
define_id!(LocationId);
define_id!(NpcId);

// Narrative
define_id!(ChoiceId);

// Persistence
define_id!(CheckpointId);

// Admin-managed templates (characters, locations, avatars)
define_id!(TemplateId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_transparent_on_the_wire() {
        let id: WorldId = serde_json::from_str("\"world_1\"").unwrap();
        assert_eq!(id, WorldId::from("world_1"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"world_1\"");
    }

    #[test]
    fn id_displays_as_raw_value() {
        assert_eq!(NpcId::from("npc_barkeep").to_string(), "npc_barkeep");
    }
}
