//! Navigation targets produced by the controllers.
//!
//! The routing table itself is presentation; controllers only hand
//! back the route value the view should navigate to next.

use hunthub_core::types::EntityId;

/// A client-side navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The hunt list view.
    HuntList,
    /// The add-hunt form.
    NewHunt,
    /// A single hunt's profile view.
    HuntProfile(EntityId),
}

impl Route {
    /// URL path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::HuntList => "/hunts".to_string(),
            Route::NewHunt => "/hunts/new".to_string(),
            Route::HuntProfile(id) => format!("/hunts/{id}"),
        }
    }
}
