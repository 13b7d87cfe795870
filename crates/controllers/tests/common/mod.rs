//! Shared test doubles for controller tests.
//!
//! [`MockHuntService`] stands in for the remote server: canned
//! records, scriptable failures, and per-id gates that hold a detail
//! request in flight until the test releases it. That makes
//! supersession and destruction deterministic to exercise.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use hunthub_client::error::ApiError;
use hunthub_client::service::HuntService;
use hunthub_core::filter::HuntFilter;
use hunthub_core::hunt::{Hunt, HuntDraft};
use hunthub_core::types::EntityId;

/// Install a test-writer subscriber so `tracing` output lands in the
/// captured test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("hunthub_controllers=debug")
        .with_test_writer()
        .try_init();
}

/// The canned hunt records every test starts from.
pub fn test_hunts() -> Vec<Hunt> {
    vec![
        Hunt {
            id: "chris_id".to_string(),
            hostid: "chris_id".to_string(),
            title: "Chris's Hunt".to_string(),
            description: "Chris's Hunt".to_string(),
            task: Some("Chris's Hunt".to_string()),
        },
        Hunt {
            id: "pat_id".to_string(),
            hostid: "pat_id".to_string(),
            title: "Pat's Hunt".to_string(),
            description: "Pat's Hunt".to_string(),
            task: Some("Pat's Hunt".to_string()),
        },
        Hunt {
            id: "jamie_id".to_string(),
            hostid: "jamie_id".to_string(),
            title: "Jamie's Hunt".to_string(),
            description: "Jamie's Hunt".to_string(),
            task: Some("Jamie's Hunt".to_string()),
        },
    ]
}

/// Scripted [`HuntService`] double.
pub struct MockHuntService {
    hunts: Vec<Hunt>,
    /// Id handed out by `add_hunt`.
    new_id: EntityId,
    /// When set, every call fails with this status and message.
    failure: Mutex<Option<(u16, String)>>,
    /// Detail requests for a gated id park until the gate is notified.
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    /// Filter the last list call was made with.
    last_filter: Mutex<Option<HuntFilter>>,
    add_calls: AtomicUsize,
}

impl MockHuntService {
    pub fn new() -> Self {
        Self {
            hunts: test_hunts(),
            new_id: "1".to_string(),
            failure: Mutex::new(None),
            gates: Mutex::new(HashMap::new()),
            last_filter: Mutex::new(None),
            add_calls: AtomicUsize::new(0),
        }
    }

    /// A double whose every call fails with `status` and `message`.
    pub fn failing(status: u16, message: &str) -> Self {
        let service = Self::new();
        *service.failure.try_lock().unwrap() = Some((status, message.to_string()));
        service
    }

    /// Make subsequent calls fail with `status` and `message`.
    pub async fn set_failure(&self, status: u16, message: &str) {
        *self.failure.lock().await = Some((status, message.to_string()));
    }

    /// Let subsequent calls succeed again.
    pub async fn clear_failure(&self) {
        *self.failure.lock().await = None;
    }

    /// Gate detail retrievals of `id`; the returned handle releases
    /// them. Releasing before the request arrives also works (the
    /// notification is stored as a permit).
    pub async fn gate(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .await
            .insert(id.to_string(), Arc::clone(&gate));
        gate
    }

    /// Filter of the most recent list call.
    pub async fn last_filter(&self) -> Option<HuntFilter> {
        self.last_filter.lock().await.clone()
    }

    /// How many times `add_hunt` was called.
    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    async fn check_failure(&self) -> Result<(), ApiError> {
        if let Some((status, message)) = self.failure.lock().await.clone() {
            return Err(ApiError::Api {
                status,
                message,
                title: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HuntService for MockHuntService {
    async fn list_hunts(&self, filter: &HuntFilter) -> Result<Vec<Hunt>, ApiError> {
        *self.last_filter.lock().await = Some(filter.clone());
        self.check_failure().await?;
        Ok(self.hunts.clone())
    }

    async fn get_hunt_by_id(&self, id: &str) -> Result<Hunt, ApiError> {
        let gate = self.gates.lock().await.get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.check_failure().await?;
        self.hunts
            .iter()
            .find(|hunt| hunt.id == id)
            .cloned()
            .ok_or(ApiError::Api {
                status: 404,
                message: "The requested hunt was not found".to_string(),
                title: Some("Not Found".to_string()),
            })
    }

    async fn add_hunt(&self, _draft: &HuntDraft) -> Result<EntityId, ApiError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(self.new_id.clone())
    }
}
