//! Completion-timestamp derivation for task status transitions.
//!
//! `completed_at` is a derived field: it is non-null exactly when the task's
//! status is `completed` after the last successful write. Callers apply the
//! returned [`CompletionChange`] in the same statement as the rest of the
//! write, so no persisted state ever has `status = completed` with a null
//! timestamp.

use crate::task::TaskStatus;
use crate::types::Timestamp;

/// What a write should do to `completed_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChange {
    /// Stamp the completion timestamp.
    Set(Timestamp),
    /// Clear the completion timestamp to null.
    Clear,
    /// Leave the stored value untouched.
    Keep,
}

/// Derive the `completed_at` change for a create or update.
///
/// `previous` is `None` on create. `incoming` is `None` when an update does
/// not touch `status` (meaning "unchanged").
///
/// Rules:
/// - create with `completed` stamps now; any other create leaves it null
/// - transition into `completed` stamps now
/// - `completed` to `completed` does not re-stamp
/// - any explicit non-`completed` status clears it, even between two
///   non-completed statuses
/// - an update that omits `status` leaves it untouched
pub fn completion_change(
    previous: Option<TaskStatus>,
    incoming: Option<TaskStatus>,
    now: Timestamp,
) -> CompletionChange {
    match (previous, incoming) {
        // Create path.
        (None, Some(TaskStatus::Completed)) => CompletionChange::Set(now),
        (None, _) => CompletionChange::Clear,

        // Update path.
        (Some(TaskStatus::Completed), Some(TaskStatus::Completed)) => CompletionChange::Keep,
        (Some(_), Some(TaskStatus::Completed)) => CompletionChange::Set(now),
        (Some(_), Some(_)) => CompletionChange::Clear,
        (Some(_), None) => CompletionChange::Keep,
    }
}
