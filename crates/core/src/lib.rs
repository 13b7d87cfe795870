//! Domain types for the hunthub client.
//!
//! Entity models and their create DTOs, filter criteria with
//! query-parameter encoding, and the form-field validation rules
//! shared by the view controllers.

pub mod filter;
pub mod form;
pub mod hunt;
pub mod task;
pub mod types;
