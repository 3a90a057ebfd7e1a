use serde::{Deserialize, Serialize};

/// A persisted to-do item.
///
/// The id is assigned by the storage engine on insert and never changes
/// afterwards; no two tasks share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}
