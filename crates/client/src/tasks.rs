//! REST client for the tasks endpoints.
//!
//! Same shape as [`crate::hunts`], against `<base>tasks`.

use async_trait::async_trait;
use validator::Validate;

use hunthub_core::filter::TaskFilter;
use hunthub_core::task::{Task, TaskDraft};
use hunthub_core::types::EntityId;

use crate::config::ApiConfig;
use crate::error::{parse_response, ApiError};
use crate::service::{CreatedResponse, TaskService};

/// HTTP client for the tasks collection.
pub struct TaskApi {
    client: reqwest::Client,
    tasks_url: String,
}

impl TaskApi {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            tasks_url: format!("{}tasks", config.base_url),
        }
    }

    /// The collection endpoint URL (`<base>tasks`).
    pub fn tasks_url(&self) -> &str {
        &self.tasks_url
    }

    fn list_request(&self, filter: &TaskFilter) -> reqwest::RequestBuilder {
        self.client
            .get(&self.tasks_url)
            .query(&filter.to_query_pairs())
    }
}

#[async_trait]
impl TaskService for TaskApi {
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
        let response = self.list_request(filter).send().await?;
        let tasks: Vec<Task> = parse_response(response).await?;
        tracing::debug!(count = tasks.len(), "Tasks listed");
        Ok(tasks)
    }

    async fn get_task_by_id(&self, id: &str) -> Result<Task, ApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.tasks_url, id))
            .send()
            .await?;
        let task: Task = parse_response(response).await?;
        tracing::debug!(task_id = %task.id, "Task fetched");
        Ok(task)
    }

    async fn add_task(&self, draft: &TaskDraft) -> Result<EntityId, ApiError> {
        draft.validate()?;

        let response = self.client.post(&self.tasks_url).json(draft).send().await?;
        let created: CreatedResponse = parse_response(response).await?;

        tracing::info!(task_id = %created.id, hunt_id = %draft.hunt_id, "Task created");
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> TaskApi {
        TaskApi::new(&ApiConfig::new("http://localhost:4567/api/", 30))
    }

    #[test]
    fn collection_url_is_base_plus_tasks() {
        assert_eq!(api().tasks_url(), "http://localhost:4567/api/tasks");
    }

    #[test]
    fn filter_uses_camel_case_parameter_keys() {
        let filter = TaskFilter {
            hunt_id: Some("chris_id".to_string()),
            task_description: Some("fountain".to_string()),
        };
        let request = api().list_request(&filter).build().unwrap();
        assert_eq!(
            request.url().query(),
            Some("huntId=chris_id&taskDescription=fountain"),
        );
    }

    #[test]
    fn empty_filter_produces_no_query_string() {
        let request = api().list_request(&TaskFilter::default()).build().unwrap();
        assert_eq!(request.url().query(), None);
    }
}
