use mongodb::bson::{DateTime, Document, doc};
use serde::{Deserialize, Serialize};

use crate::dao::models::GameEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    name: String,
    #[serde(default)]
    times_selected: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime>,
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            name: value.name,
            times_selected: u64::try_from(value.times_selected).unwrap_or_default(),
        }
    }
}

/// Matches the document of game `name`.
pub fn name_filter(name: &str) -> Document {
    doc! {"name": name}
}

/// Update creating the record with a zero count; a no-op on an existing record.
pub fn insert_if_absent_update(name: &str) -> Document {
    doc! {
        "$setOnInsert": {
            "name": name,
            "times_selected": 0_i64,
            "created_at": DateTime::now(),
        }
    }
}

/// Adds one to the selection count and refreshes `updated_at`.
pub fn increment_update() -> Document {
    doc! {
        "$inc": {"times_selected": 1_i64},
        "$set": {"updated_at": DateTime::now()},
    }
}
