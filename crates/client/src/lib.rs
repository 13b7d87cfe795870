//! Async REST client for the hunthub API.
//!
//! Typed service traits plus [`reqwest`]-backed implementations for
//! the hunts and tasks collections, environment-driven configuration,
//! and the error taxonomy shared by every call. Services perform no
//! recovery and no retry: each failure is surfaced unchanged to the
//! calling controller.

pub mod config;
pub mod error;
pub mod hunts;
pub mod service;
pub mod tasks;
