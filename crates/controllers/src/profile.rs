//! Detail (profile) view controller.
//!
//! Resolves the routed hunt id into a loaded record. A route change
//! supersedes any still-pending retrieval, so at most one detail
//! request is in flight per controller and a late response for a
//! stale id can never overwrite state for the current one. Destroying
//! the controller cancels the pipeline for good.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use hunthub_client::error::ApiError;
use hunthub_client::service::HuntService;
use hunthub_core::hunt::Hunt;
use hunthub_core::types::EntityId;

/// Hint shown alongside a failed load.
const LOAD_HELP_HINT: &str = "There was a problem loading the hunt - try again.";

/// Structured error state for the profile view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileError {
    /// Fixed human-readable hint.
    pub help: String,
    /// Raw HTTP error text.
    pub http_response: String,
    /// `title` field from the server's error body, if present.
    pub message: Option<String>,
}

/// Displayed state owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub hunt: Option<Hunt>,
    pub error: Option<ProfileError>,
}

/// One spawned retrieval tied to a single route id.
struct InFlight {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Drives the detail retrieval service from route-id changes.
pub struct HuntProfileController {
    service: Arc<dyn HuntService>,
    state: Arc<RwLock<ProfileState>>,
    /// Master token, cancelled exactly once on destroy. Per-request
    /// tokens are children of it.
    destroy: CancellationToken,
    current: Option<InFlight>,
}

impl HuntProfileController {
    pub fn new(service: Arc<dyn HuntService>) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(ProfileState::default())),
            destroy: CancellationToken::new(),
            current: None,
        }
    }

    /// Snapshot of the displayed state.
    pub async fn state(&self) -> ProfileState {
        self.state.read().await.clone()
    }

    /// React to a route-id change: cancel the pending retrieval (if
    /// any), then issue exactly one request for `id`.
    pub async fn navigate_to(&mut self, id: impl Into<EntityId>) {
        if self.destroy.is_cancelled() {
            return;
        }
        self.supersede().await;

        let id = id.into();
        let cancel = self.destroy.child_token();
        let task_cancel = cancel.clone();
        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);

        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = task_cancel.cancelled() => {
                    tracing::debug!(hunt_id = %id, "Hunt load superseded");
                    return;
                }
                result = service.get_hunt_by_id(&id) => result,
            };

            let mut state = state.write().await;
            // A cancellation that raced past the select must still not
            // touch state.
            if task_cancel.is_cancelled() {
                return;
            }
            match outcome {
                Ok(hunt) => {
                    tracing::debug!(hunt_id = %hunt.id, "Hunt loaded");
                    state.hunt = Some(hunt);
                    state.error = None;
                }
                Err(err) => {
                    tracing::warn!(hunt_id = %id, error = %err, "Failed to load hunt");
                    state.error = Some(profile_error(&err));
                }
            }
        });

        self.current = Some(InFlight { handle, cancel });
    }

    /// Wait for the current retrieval, if any, to finish.
    pub async fn settle(&mut self) {
        if let Some(inflight) = self.current.take() {
            let _ = inflight.handle.await;
        }
    }

    /// Tear the controller down. Emits the one-shot cancellation that
    /// terminates the pipeline; once this returns, no further state
    /// mutation can happen.
    pub async fn destroy(&mut self) {
        self.destroy.cancel();
        self.settle().await;
    }

    /// Cancel and join the pending retrieval from a previous id.
    async fn supersede(&mut self) {
        if let Some(inflight) = self.current.take() {
            inflight.cancel.cancel();
            let _ = inflight.handle.await;
        }
    }
}

impl Drop for HuntProfileController {
    fn drop(&mut self) {
        // A dropped controller must not keep mutating state from a
        // still-detached task.
        self.destroy.cancel();
    }
}

/// Map a service failure into the profile view's structured error.
fn profile_error(err: &ApiError) -> ProfileError {
    let message = match err {
        ApiError::Api { title, .. } => title.clone(),
        _ => None,
    };
    ProfileError {
        help: LOAD_HELP_HINT.to_string(),
        http_response: err.to_string(),
        message,
    }
}
