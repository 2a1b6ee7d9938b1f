//! Aggregate queries over the task set for `GET /reports`.

use sqlx::PgPool;

use crate::models::report::{CategoryCount, PriorityCount, StatusCount, TaskReport};

/// Computes grouped counts over the full `tasks` table.
///
/// Reports never filter: each grouping runs over the entire table, and only
/// values actually present among tasks produce rows.
pub struct ReportRepo;

impl ReportRepo {
    /// Build the full report: grand total plus status/category/priority
    /// groupings.
    pub async fn build(pool: &PgPool) -> Result<TaskReport, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        let by_status = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM tasks GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await?;

        // LEFT JOIN so a task whose category vanished out-of-band still
        // contributes a row with null name/color.
        let by_category = sqlx::query_as::<_, CategoryCount>(
            "SELECT t.category_id, c.name AS category_name, c.color AS category_color,
                    COUNT(*) AS count
             FROM tasks t
             LEFT JOIN categories c ON c.id = t.category_id
             GROUP BY t.category_id, c.name, c.color
             ORDER BY t.category_id",
        )
        .fetch_all(pool)
        .await?;

        let by_priority = sqlx::query_as::<_, PriorityCount>(
            "SELECT priority, COUNT(*) AS count FROM tasks GROUP BY priority ORDER BY priority",
        )
        .fetch_all(pool)
        .await?;

        Ok(TaskReport {
            total,
            by_status,
            by_category,
            by_priority,
        })
    }
}
