//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    /// `#RRGGBB` hex color.
    pub color: String,
}

/// DTO for updating an existing category. All fields are optional;
/// omitted fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}
