//! Matriculation (enrollment) rows and persistence. Rows join the student
//! and course for the response's denormalized display fields.

use super::EntityStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct MatriculationRow {
    pub id_matriculation: i64,
    pub academic_period: String,
    pub matriculation_date: Option<NaiveDate>,
    pub matriculation_status: Option<String>,
    pub id_student: i64,
    pub id_course: i64,
    pub student_name: String,
    pub student_surname: String,
    pub course_name: String,
    pub course_code: String,
}

#[derive(Debug, Clone)]
pub struct NewMatriculation {
    pub academic_period: String,
    pub matriculation_date: Option<NaiveDate>,
    pub matriculation_status: Option<String>,
    pub id_student: i64,
    pub id_course: i64,
}

const SELECT: &str = "SELECT m.id_matriculation, m.academic_period, m.matriculation_date, \
     m.matriculation_status, m.id_student, m.id_course, \
     s.name AS student_name, s.surname AS student_surname, \
     c.name AS course_name, c.code AS course_code \
     FROM matriculations m \
     JOIN students s ON s.id_student = m.id_student \
     JOIN courses c ON c.id_course = m.id_course";

pub struct MatriculationStore;

impl MatriculationStore {
    async fn reload(pool: &PgPool, id: i64) -> Result<MatriculationRow, AppError> {
        <Self as EntityStore>::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("matriculation {} missing after write", id)))
    }
}

#[async_trait]
impl EntityStore for MatriculationStore {
    type Id = i64;
    type New = NewMatriculation;
    type Row = MatriculationRow;

    async fn save(pool: &PgPool, new: &NewMatriculation) -> Result<MatriculationRow, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO matriculations (academic_period, matriculation_date, matriculation_status, id_student, id_course) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id_matriculation",
        )
        .bind(&new.academic_period)
        .bind(new.matriculation_date)
        .bind(&new.matriculation_status)
        .bind(new.id_student)
        .bind(new.id_course)
        .fetch_one(pool)
        .await?;
        Self::reload(pool, id).await
    }

    async fn replace(
        pool: &PgPool,
        id: i64,
        new: &NewMatriculation,
    ) -> Result<Option<MatriculationRow>, AppError> {
        let res = sqlx::query(
            "UPDATE matriculations SET academic_period = $1, matriculation_date = $2, \
             matriculation_status = $3, id_student = $4, id_course = $5 WHERE id_matriculation = $6",
        )
        .bind(&new.academic_period)
        .bind(new.matriculation_date)
        .bind(&new.matriculation_status)
        .bind(new.id_student)
        .bind(new.id_course)
        .bind(id)
        .execute(pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Self::reload(pool, id).await?))
    }

    async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<MatriculationRow>, AppError> {
        let sql = format!("{SELECT} WHERE m.id_matriculation = $1");
        Ok(sqlx::query_as::<_, MatriculationRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<MatriculationRow>, AppError> {
        let sql = format!("{SELECT} ORDER BY m.id_matriculation");
        Ok(sqlx::query_as::<_, MatriculationRow>(&sql)
            .fetch_all(pool)
            .await?)
    }

    async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM matriculations WHERE id_matriculation = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM matriculations WHERE id_matriculation = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}
