//! Service traits for hunt and task retrieval and creation.
//!
//! Controllers depend on these traits rather than on the concrete
//! [`reqwest`] clients, so tests can substitute a scripted double for
//! the remote server.

use async_trait::async_trait;
use serde::Deserialize;

use hunthub_core::filter::{HuntFilter, TaskFilter};
use hunthub_core::hunt::{Hunt, HuntDraft};
use hunthub_core::task::{Task, TaskDraft};
use hunthub_core::types::EntityId;

use crate::error::ApiError;

/// Response body of a successful create request.
#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    /// The server-assigned identifier of the new record.
    pub id: EntityId,
}

/// Read and create operations against the hunts collection.
#[async_trait]
pub trait HuntService: Send + Sync {
    /// Fetch the hunts matching `filter`, in server order.
    async fn list_hunts(&self, filter: &HuntFilter) -> Result<Vec<Hunt>, ApiError>;

    /// Fetch exactly one hunt by id. A missing record surfaces as a
    /// failed read, not as a distinct "not found".
    async fn get_hunt_by_id(&self, id: &str) -> Result<Hunt, ApiError>;

    /// Create a hunt from `draft` and return the server-assigned id.
    /// The draft's values are never cleared by the service.
    async fn add_hunt(&self, draft: &HuntDraft) -> Result<EntityId, ApiError>;
}

/// Read and create operations against the tasks collection.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch the tasks matching `filter`, in server order.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError>;

    /// Fetch exactly one task by id.
    async fn get_task_by_id(&self, id: &str) -> Result<Task, ApiError>;

    /// Create a task from `draft` and return the server-assigned id.
    async fn add_task(&self, draft: &TaskDraft) -> Result<EntityId, ApiError>;
}
