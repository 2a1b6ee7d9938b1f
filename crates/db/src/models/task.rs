//! Task entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::task::{TaskPriority, TaskStatus};
use taskdeck_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// DTO for creating a new task. `created_at` and `completed_at` are
/// derived server-side and never accepted from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_at: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional; omitted
/// fields are left untouched. An empty payload is a valid no-op.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due_at: Option<Timestamp>,
}

/// Optional list predicates, combined with logical AND.
///
/// All `None` means "no filter": the full task set is returned.
#[derive(Debug, Clone, Default)]
pub struct TaskFilters {
    pub status: Option<TaskStatus>,
    pub category_id: Option<DbId>,
    pub priority: Option<TaskPriority>,
    /// Lower bound on `created_at` (inclusive).
    pub created_after: Option<Timestamp>,
    /// Upper bound on `created_at` (inclusive).
    pub created_before: Option<Timestamp>,
}

/// The category fields embedded in task reads.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// A task joined with its category, as returned by list/get reads.
///
/// `category` is `None` only if the foreign key fails to resolve, which the
/// restrict policy on category deletion prevents in practice.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithCategory {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub category: Option<CategoryRef>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// Flat row shape for the task-category LEFT JOIN, folded into
/// [`TaskWithCategory`] after fetching.
#[derive(Debug, FromRow)]
pub struct TaskWithCategoryRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub category_ref_id: Option<DbId>,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
}

impl From<TaskWithCategoryRow> for TaskWithCategory {
    fn from(row: TaskWithCategoryRow) -> Self {
        let category = match (row.category_ref_id, row.category_name, row.category_color) {
            (Some(id), Some(name), Some(color)) => Some(CategoryRef { id, name, color }),
            _ => None,
        };
        TaskWithCategory {
            id: row.id,
            title: row.title,
            description: row.description,
            category_id: row.category_id,
            category,
            priority: row.priority,
            status: row.status,
            created_at: row.created_at,
            due_at: row.due_at,
            completed_at: row.completed_at,
        }
    }
}
