//! Aggregate report shapes for `GET /reports`.

use serde::Serialize;
use sqlx::FromRow;
use taskdeck_core::task::{TaskPriority, TaskStatus};
use taskdeck_core::types::DbId;

/// Task count for one status value present in the table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: TaskStatus,
    pub count: i64,
}

/// Task count for one referenced category.
///
/// Name and color come from a LEFT JOIN and are null when the category row
/// no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryCount {
    pub category_id: DbId,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub count: i64,
}

/// Task count for one priority value present in the table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PriorityCount {
    pub priority: TaskPriority,
    pub count: i64,
}

/// The full report payload: a grand total plus three groupings.
///
/// Groupings only contain values actually present among tasks; an empty
/// table yields empty arrays, not zero-filled enum entries.
#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    pub total: i64,
    pub by_status: Vec<StatusCount>,
    pub by_category: Vec<CategoryCount>,
    pub by_priority: Vec<PriorityCount>,
}
