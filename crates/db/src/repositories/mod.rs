//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod report_repo;
pub mod task_repo;

pub use category_repo::CategoryRepo;
pub use report_repo::ReportRepo;
pub use task_repo::TaskRepo;
