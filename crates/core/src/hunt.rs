//! Hunt entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityId;

/// A persisted hunt record as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunt {
    /// Server-assigned identifier (wire key `_id`). Never reused.
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// Identifier of the owning actor.
    pub hostid: String,
    pub title: String,
    pub description: String,
    /// Optional free-text task note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl Hunt {
    /// A hunt with a non-empty identifier has been persisted by the
    /// server; one without is a draft held only in form state.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// DTO for creating a new hunt.
///
/// Deliberately carries no identifier field: the server assigns the id,
/// so a create request can never include a client-supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct HuntDraft {
    #[validate(length(min = 2, max = 50))]
    pub title: String,
    #[validate(length(min = 2, max = 50))]
    pub hostid: String,
    #[validate(length(min = 2, max = 50))]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}
