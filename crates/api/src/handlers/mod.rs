pub mod categories;
pub mod reports;
pub mod tasks;

use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse a path id segment.
///
/// A non-numeric id can match no record, so it reports the entity as not
/// found rather than failing as a bad request.
pub(crate) fn parse_id(entity: &'static str, raw: &str) -> AppResult<DbId> {
    raw.parse()
        .map_err(|_| AppError::Core(CoreError::NotFound { entity }))
}
