//! Course rows and persistence. Rows join the owning teacher so responses
//! can carry the teacher's display name without a second lookup.

use super::EntityStore;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id_course: i64,
    pub name: String,
    pub code: String,
    pub credits: Option<i32>,
    pub semester: Option<i32>,
    pub id_teacher: i64,
    pub teacher_name: String,
    pub teacher_surname: String,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub credits: Option<i32>,
    pub semester: Option<i32>,
    pub id_teacher: i64,
}

const SELECT: &str = "SELECT c.id_course, c.name, c.code, c.credits, c.semester, c.id_teacher, \
     t.name AS teacher_name, t.surname AS teacher_surname \
     FROM courses c JOIN teachers t ON t.id_teacher = c.id_teacher";

pub struct CourseStore;

impl CourseStore {
    /// Insert-then-reload so the returned row carries the joined teacher
    /// columns. A missing reload means the persistence path failed.
    async fn reload(pool: &PgPool, id: i64) -> Result<CourseRow, AppError> {
        <Self as EntityStore>::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("course {} missing after write", id)))
    }
}

#[async_trait]
impl EntityStore for CourseStore {
    type Id = i64;
    type New = NewCourse;
    type Row = CourseRow;

    async fn save(pool: &PgPool, new: &NewCourse) -> Result<CourseRow, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO courses (name, code, credits, semester, id_teacher) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id_course",
        )
        .bind(&new.name)
        .bind(&new.code)
        .bind(new.credits)
        .bind(new.semester)
        .bind(new.id_teacher)
        .fetch_one(pool)
        .await?;
        Self::reload(pool, id).await
    }

    async fn replace(pool: &PgPool, id: i64, new: &NewCourse) -> Result<Option<CourseRow>, AppError> {
        let res = sqlx::query(
            "UPDATE courses SET name = $1, code = $2, credits = $3, semester = $4, id_teacher = $5 \
             WHERE id_course = $6",
        )
        .bind(&new.name)
        .bind(&new.code)
        .bind(new.credits)
        .bind(new.semester)
        .bind(new.id_teacher)
        .bind(id)
        .execute(pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Self::reload(pool, id).await?))
    }

    async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<CourseRow>, AppError> {
        let sql = format!("{SELECT} WHERE c.id_course = $1");
        Ok(sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<CourseRow>, AppError> {
        let sql = format!("{SELECT} ORDER BY c.id_course");
        Ok(sqlx::query_as::<_, CourseRow>(&sql).fetch_all(pool).await?)
    }

    async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM courses WHERE id_course = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM courses WHERE id_course = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}
