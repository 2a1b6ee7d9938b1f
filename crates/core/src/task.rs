//! Task domain: closed priority/status enumerations and field validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length of a task title, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Task priority. Closed set; anything else is rejected at deserialization.
///
/// Wire and database spelling is lowercase (`urgent`, `high`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
pub enum TaskPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Urgent => "urgent",
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

/// Task status. Closed set; anything else is rejected at deserialization.
///
/// Wire and database spelling is kebab-case (`in-progress`, not `InProgress`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

/// Validate a task title: 1-200 characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {TITLE_MAX_LEN} characters"
        )));
    }
    Ok(())
}
