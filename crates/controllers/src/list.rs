//! List view controller.
//!
//! Owns the current filter and the last server-filtered result set.
//! Each refresh issues one independent list request; there is no
//! cancellation path, so when refreshes overlap, whichever response
//! lands last wins.

use std::sync::Arc;

use hunthub_client::service::HuntService;
use hunthub_core::filter::HuntFilter;
use hunthub_core::hunt::Hunt;

/// Retrieval error surfaced to the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListError {
    /// HTTP status, when the failure carried one.
    pub status: Option<u16>,
    pub message: String,
}

/// Drives the list retrieval service and holds the list view's state.
pub struct HuntListController {
    service: Arc<dyn HuntService>,
    filter: HuntFilter,
    hunts: Vec<Hunt>,
    error: Option<ListError>,
}

impl HuntListController {
    pub fn new(service: Arc<dyn HuntService>) -> Self {
        Self {
            service,
            filter: HuntFilter::default(),
            hunts: Vec::new(),
            error: None,
        }
    }

    /// The filter applied to the next refresh.
    pub fn filter(&self) -> &HuntFilter {
        &self.filter
    }

    /// Replace the filter. Takes effect on the next
    /// [`refresh`](Self::refresh).
    pub fn set_filter(&mut self, filter: HuntFilter) {
        self.filter = filter;
    }

    /// The records currently displayed (the last successful fetch).
    pub fn hunts(&self) -> &[Hunt] {
        &self.hunts
    }

    /// The last retrieval error, cleared by a successful refresh.
    pub fn error(&self) -> Option<&ListError> {
        self.error.as_ref()
    }

    /// Fetch the server-filtered hunts for the current filter.
    ///
    /// On failure the previously displayed records stay as they are
    /// and the error is stored for the view.
    pub async fn refresh(&mut self) {
        match self.service.list_hunts(&self.filter).await {
            Ok(hunts) => {
                tracing::debug!(count = hunts.len(), "Hunt list refreshed");
                self.hunts = hunts;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to refresh hunt list");
                self.error = Some(ListError {
                    status: err.status(),
                    message: err.to_string(),
                });
            }
        }
    }
}
