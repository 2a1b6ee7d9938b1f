//! Repository for the `tasks` table.
//!
//! Writes apply the completion lifecycle rule from `taskdeck_core` inside the
//! same statement as the rest of the change, so `status` and `completed_at`
//! are never persisted out of step. Reads join each task with its category.

use sqlx::{PgPool, QueryBuilder};
use taskdeck_core::lifecycle::{completion_change, CompletionChange};
use taskdeck_core::task::TaskStatus;
use taskdeck_core::types::{DbId, Timestamp};

use crate::models::task::{
    CreateTask, Task, TaskFilters, TaskWithCategory, TaskWithCategoryRow, UpdateTask,
};

/// Column list shared across write queries.
const COLUMNS: &str =
    "id, title, description, category_id, priority, status, created_at, due_at, completed_at";

/// Base SELECT for reads: every task row joined with its category fields.
const SELECT_WITH_CATEGORY: &str = "SELECT t.id, t.title, t.description, t.category_id, \
     t.priority, t.status, t.created_at, t.due_at, t.completed_at, \
     c.id AS category_ref_id, c.name AS category_name, c.color AS category_color \
     FROM tasks t LEFT JOIN categories c ON c.id = t.category_id";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// `created_at` is stamped with `now`; `completed_at` is derived from the
    /// incoming status per the lifecycle rule.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        now: Timestamp,
    ) -> Result<Task, sqlx::Error> {
        let completed_at = match completion_change(None, Some(input.status), now) {
            CompletionChange::Set(ts) => Some(ts),
            _ => None,
        };

        let query = format!(
            "INSERT INTO tasks
                (title, description, category_id, priority, status, created_at, due_at, completed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.priority)
            .bind(input.status)
            .bind(now)
            .bind(input.due_at)
            .bind(completed_at)
            .fetch_one(pool)
            .await
    }

    /// List tasks matching the given filters, each joined with its category.
    ///
    /// Present filters are composed with logical AND; an empty filter set
    /// returns the full table in insertion (id) order.
    pub async fn list(
        pool: &PgPool,
        filters: &TaskFilters,
    ) -> Result<Vec<TaskWithCategory>, sqlx::Error> {
        let mut qb: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(SELECT_WITH_CATEGORY);

        let mut sep = " WHERE ";
        if let Some(status) = filters.status {
            qb.push(sep).push("t.status = ").push_bind(status);
            sep = " AND ";
        }
        if let Some(category_id) = filters.category_id {
            qb.push(sep).push("t.category_id = ").push_bind(category_id);
            sep = " AND ";
        }
        if let Some(priority) = filters.priority {
            qb.push(sep).push("t.priority = ").push_bind(priority);
            sep = " AND ";
        }
        if let Some(created_after) = filters.created_after {
            qb.push(sep).push("t.created_at >= ").push_bind(created_after);
            sep = " AND ";
        }
        if let Some(created_before) = filters.created_before {
            qb.push(sep).push("t.created_at <= ").push_bind(created_before);
        }
        qb.push(" ORDER BY t.id");

        let rows = qb
            .build_query_as::<TaskWithCategoryRow>()
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Find a task by its ID, joined with its category.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskWithCategory>, sqlx::Error> {
        let query = format!("{SELECT_WITH_CATEGORY} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TaskWithCategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// `previous_status` is the status stored before this update; together
    /// with the incoming status it decides whether `completed_at` is
    /// stamped, cleared, or left alone, all within this single statement.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
        previous_status: TaskStatus,
        now: Timestamp,
    ) -> Result<Option<Task>, sqlx::Error> {
        let (touch_completed, completed_at) =
            match completion_change(Some(previous_status), input.status, now) {
                CompletionChange::Set(ts) => (true, Some(ts)),
                CompletionChange::Clear => (true, None),
                CompletionChange::Keep => (false, None),
            };

        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category_id = COALESCE($4, category_id),
                priority = COALESCE($5, priority),
                status = COALESCE($6, status),
                due_at = COALESCE($7, due_at),
                completed_at = CASE WHEN $8 THEN $9 ELSE completed_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.priority)
            .bind(input.status)
            .bind(input.due_at)
            .bind(touch_completed)
            .bind(completed_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
