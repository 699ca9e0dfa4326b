use serde::{Deserialize, Serialize};

/// A game known to the picker together with how often it has been chosen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Unique, trimmed display name of the game.
    pub name: String,
    /// Number of runs that picked this game.
    pub times_selected: u64,
}

impl GameEntity {
    /// Build a record for a game that has never been picked.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            times_selected: 0,
        }
    }

    /// Build a record with an explicit selection count.
    pub fn with_count(name: impl Into<String>, times_selected: u64) -> Self {
        Self {
            name: name.into(),
            times_selected,
        }
    }
}

/// Result of inserting a catalog entry into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new record was created with a zero count.
    Created,
    /// A record with that name already existed and was left untouched.
    AlreadyPresent,
}
