//! Add-hunt form controller.
//!
//! Owns the draft field values, re-evaluates the per-field rules on
//! every value change, and on submission calls the create service,
//! reporting the outcome through the notification bus and a
//! navigation target.

use std::sync::Arc;

use hunthub_client::service::HuntService;
use hunthub_core::form::{self, FieldRule, NAME_FIELD_RULES};
use hunthub_core::hunt::HuntDraft;

use crate::notify::NotificationBus;
use crate::route::Route;

/// A single validated form field.
#[derive(Debug, Clone)]
pub struct FormControl {
    value: String,
    rules: &'static [FieldRule],
}

impl FormControl {
    fn with_rules(rules: &'static [FieldRule]) -> Self {
        Self {
            value: String::new(),
            rules,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Update the value. Rules are pure, so validation state is
    /// simply recomputed on every read.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Codes of every currently violated rule, in declared order.
    pub fn errors(&self) -> Vec<&'static str> {
        form::violated_codes(&self.value, self.rules)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The message the view displays for this field right now, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        form::error_message(&self.errors())
    }
}

/// Owns the add-hunt draft until it is successfully submitted.
pub struct AddHuntController {
    pub title: FormControl,
    pub hostid: FormControl,
    pub description: FormControl,
    /// Optional task note; no rules apply.
    pub task: FormControl,
    service: Arc<dyn HuntService>,
    notifications: NotificationBus,
}

impl AddHuntController {
    pub fn new(service: Arc<dyn HuntService>, notifications: NotificationBus) -> Self {
        Self {
            title: FormControl::with_rules(NAME_FIELD_RULES),
            hostid: FormControl::with_rules(NAME_FIELD_RULES),
            description: FormControl::with_rules(NAME_FIELD_RULES),
            task: FormControl::with_rules(&[]),
            service,
            notifications,
        }
    }

    /// Whether submission is currently permitted. The view disables
    /// its submit control whenever this is false.
    pub fn is_valid(&self) -> bool {
        self.title.is_valid()
            && self.hostid.is_valid()
            && self.description.is_valid()
            && self.task.is_valid()
    }

    /// The current field values as a create draft.
    pub fn to_draft(&self) -> HuntDraft {
        HuntDraft {
            title: self.title.value().to_string(),
            hostid: self.hostid.value().to_string(),
            description: self.description.value().to_string(),
            task: match self.task.value() {
                "" => None,
                value => Some(value.to_string()),
            },
        }
    }

    /// Submit the form.
    ///
    /// Returns the profile route of the new record on success so the
    /// view can navigate there. On any failure the field values are
    /// left exactly as entered and no navigation target is produced;
    /// the outcome is also posted as a transient notification.
    pub async fn submit_form(&self) -> Option<Route> {
        if !self.is_valid() {
            return None;
        }

        let draft = self.to_draft();
        match self.service.add_hunt(&draft).await {
            Ok(new_id) => {
                tracing::info!(hunt_id = %new_id, "Hunt added");
                self.notifications
                    .post(format!("Added hunt {}", draft.title));
                Some(Route::HuntProfile(new_id))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to add hunt");
                let status = err
                    .status()
                    .map_or_else(|| "none".to_string(), |status| status.to_string());
                self.notifications.post(format!(
                    "Problem contacting the server - Error Code: {status}, Message: {err}",
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hunthub_client::error::ApiError;
    use hunthub_core::filter::HuntFilter;
    use hunthub_core::hunt::Hunt;
    use hunthub_core::types::EntityId;

    /// Minimal service double; the validation tests never reach it.
    struct UnreachableService;

    #[async_trait]
    impl HuntService for UnreachableService {
        async fn list_hunts(&self, _filter: &HuntFilter) -> Result<Vec<Hunt>, ApiError> {
            unreachable!("validation tests never call the service");
        }

        async fn get_hunt_by_id(&self, _id: &str) -> Result<Hunt, ApiError> {
            unreachable!("validation tests never call the service");
        }

        async fn add_hunt(&self, _draft: &HuntDraft) -> Result<EntityId, ApiError> {
            unreachable!("validation tests never call the service");
        }
    }

    fn controller() -> AddHuntController {
        AddHuntController::new(Arc::new(UnreachableService), NotificationBus::new())
    }

    #[test]
    fn empty_form_is_invalid() {
        assert!(!controller().is_valid());
    }

    #[test]
    fn title_field_accepts_an_ordinary_name() {
        let mut form = controller();
        form.title.set_value("Chris Smith");
        assert!(form.title.is_valid());
    }

    #[test]
    fn title_field_rejects_single_characters() {
        let mut form = controller();
        form.title.set_value("x");
        assert!(!form.title.is_valid());
        assert!(form.title.errors().contains(&"minlength"));
    }

    #[test]
    fn title_field_rejects_really_long_values() {
        let mut form = controller();
        form.title.set_value("x".repeat(100));
        assert!(form.title.errors().contains(&"maxlength"));
    }

    #[test]
    fn title_field_rejects_existing_names() {
        let mut form = controller();
        for taken in ["abc123", "123abc"] {
            form.title.set_value(taken);
            assert!(form.title.errors().contains(&"existingName"));
        }
    }

    #[test]
    fn required_error_message_is_composed() {
        let mut form = controller();
        form.title.set_value("");
        assert_eq!(form.title.error_message(), Some("Name is required"));
    }

    #[test]
    fn unknown_error_code_displays_unknown_error() {
        // The lookup is shared with the field controls; drive it with
        // a code no rule produces.
        assert_eq!(form::error_message(&["unknown"]), Some("Unknown error"));
    }

    #[test]
    fn form_with_all_fields_filled_is_valid() {
        let mut form = controller();
        form.title.set_value("Campus tour");
        form.hostid.set_value("joe");
        form.description.set_value("See the sights");
        assert!(form.is_valid());
    }

    #[test]
    fn empty_task_maps_to_an_absent_draft_field() {
        let mut form = controller();
        form.title.set_value("Campus tour");
        form.hostid.set_value("joe");
        form.description.set_value("See the sights");
        assert_eq!(form.to_draft().task, None);

        form.task.set_value("go");
        assert_eq!(form.to_draft().task, Some("go".to_string()));
    }
}
