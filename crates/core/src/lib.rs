//! Domain types and rules for the taskdeck API.
//!
//! This crate is pure: closed enumerations for task priority and status,
//! field-level validation, the completion-timestamp lifecycle rule, and the
//! shared error type. No I/O happens here.

pub mod category;
pub mod error;
pub mod lifecycle;
pub mod task;
pub mod types;
