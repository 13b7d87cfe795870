//! REST client for the hunts endpoints.
//!
//! Wraps `GET <base>hunts`, `GET <base>hunts/<id>`, and
//! `POST <base>hunts` using [`reqwest`]. Filters become query
//! parameters (present, non-empty fields only), drafts become JSON
//! bodies. Every call is a fresh request; nothing is cached or
//! retried here.

use async_trait::async_trait;
use validator::Validate;

use hunthub_core::filter::HuntFilter;
use hunthub_core::hunt::{Hunt, HuntDraft};
use hunthub_core::types::EntityId;

use crate::config::ApiConfig;
use crate::error::{parse_response, ApiError};
use crate::service::{CreatedResponse, HuntService};

/// HTTP client for the hunts collection.
pub struct HuntApi {
    client: reqwest::Client,
    hunts_url: String,
}

impl HuntApi {
    /// Create a client from configuration, building a dedicated
    /// [`reqwest::Client`] with the configured timeout.
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            hunts_url: format!("{}hunts", config.base_url),
        }
    }

    /// The collection endpoint URL (`<base>hunts`).
    pub fn hunts_url(&self) -> &str {
        &self.hunts_url
    }

    fn list_request(&self, filter: &HuntFilter) -> reqwest::RequestBuilder {
        self.client
            .get(&self.hunts_url)
            .query(&filter.to_query_pairs())
    }

    fn get_request(&self, id: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}/{}", self.hunts_url, id))
    }
}

#[async_trait]
impl HuntService for HuntApi {
    async fn list_hunts(&self, filter: &HuntFilter) -> Result<Vec<Hunt>, ApiError> {
        let response = self.list_request(filter).send().await?;
        let hunts: Vec<Hunt> = parse_response(response).await?;
        tracing::debug!(count = hunts.len(), "Hunts listed");
        Ok(hunts)
    }

    async fn get_hunt_by_id(&self, id: &str) -> Result<Hunt, ApiError> {
        let response = self.get_request(id).send().await?;
        let hunt: Hunt = parse_response(response).await?;
        tracing::debug!(hunt_id = %hunt.id, "Hunt fetched");
        Ok(hunt)
    }

    async fn add_hunt(&self, draft: &HuntDraft) -> Result<EntityId, ApiError> {
        draft.validate()?;

        let response = self.client.post(&self.hunts_url).json(draft).send().await?;
        let created: CreatedResponse = parse_response(response).await?;

        tracing::info!(hunt_id = %created.id, title = %draft.title, "Hunt created");
        Ok(created.id)
    }
}
