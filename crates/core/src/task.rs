//! Task entity model and DTOs.
//!
//! Tasks hang off a hunt and mirror the hunt lifecycle: created via
//! the create service, retrieved via filtered list or by id.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A persisted task record as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier (wire key `_id`).
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// The hunt this task belongs to.
    #[serde(rename = "huntId")]
    pub hunt_id: EntityId,
    #[serde(rename = "taskDescription")]
    pub task_description: String,
    /// Position of the task within its hunt's ordering.
    #[serde(default)]
    pub position: i32,
    #[serde(default, rename = "isDone")]
    pub is_done: bool,
}

/// DTO for creating a new task under an existing hunt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct TaskDraft {
    #[serde(rename = "huntId")]
    #[validate(length(min = 1))]
    pub hunt_id: EntityId,
    #[serde(rename = "taskDescription")]
    #[validate(length(min = 1))]
    pub task_description: String,
}
