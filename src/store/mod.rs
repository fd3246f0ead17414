//! Entity stores: per-entity persistence over PostgreSQL.
//!
//! Row structs carry the denormalized join columns the response shapes
//! need, so a single `find_by_id` is enough to build any response.

use crate::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use std::fmt::Display;

pub mod course;
pub mod evaluation;
pub mod matriculation;
pub mod schedule;
pub mod student;
pub mod teacher;

pub use course::CourseStore;
pub use evaluation::EvaluationStore;
pub use matriculation::MatriculationStore;
pub use schedule::ScheduleStore;
pub use student::StudentStore;
pub use teacher::TeacherStore;

/// Persistence surface every entity store provides. Identifiers are
/// store-assigned: `save` takes an id-less `New` value and returns the
/// persisted row carrying its new id.
#[async_trait]
pub trait EntityStore: Send + Sync + 'static {
    type Id: Copy + Display + DeserializeOwned + Send + Sync + 'static;
    type New: Send + Sync;
    type Row: Send;

    async fn save(pool: &PgPool, new: &Self::New) -> Result<Self::Row, AppError>;

    /// Replace the addressed row's fields; the identifier is preserved.
    /// Returns None when no row with that id exists.
    async fn replace(
        pool: &PgPool,
        id: Self::Id,
        new: &Self::New,
    ) -> Result<Option<Self::Row>, AppError>;

    async fn find_by_id(pool: &PgPool, id: Self::Id) -> Result<Option<Self::Row>, AppError>;

    async fn find_all(pool: &PgPool) -> Result<Vec<Self::Row>, AppError>;

    async fn exists_by_id(pool: &PgPool, id: Self::Id) -> Result<bool, AppError>;

    /// Returns the number of rows removed (0 when the id is unknown).
    /// Owned children go with the row via the schema's cascade rules.
    async fn delete_by_id(pool: &PgPool, id: Self::Id) -> Result<u64, AppError>;
}
