//! Evaluation rows and persistence. Rows join through the matriculation to
//! the student and course so responses can name both.

use super::EntityStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct EvaluationRow {
    pub id_evaluation: i64,
    pub type_evaluation: Option<String>,
    pub date: Option<NaiveDate>,
    pub grade: f64,
    pub id_matriculation: i64,
    pub student_name: String,
    pub student_surname: String,
    pub course_name: String,
    pub course_code: String,
}

#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub type_evaluation: Option<String>,
    pub date: Option<NaiveDate>,
    pub grade: f64,
    pub id_matriculation: i64,
}

const SELECT: &str = "SELECT e.id_evaluation, e.type_evaluation, e.date, e.grade, e.id_matriculation, \
     s.name AS student_name, s.surname AS student_surname, \
     c.name AS course_name, c.code AS course_code \
     FROM evaluations e \
     JOIN matriculations m ON m.id_matriculation = e.id_matriculation \
     JOIN students s ON s.id_student = m.id_student \
     JOIN courses c ON c.id_course = m.id_course";

pub struct EvaluationStore;

impl EvaluationStore {
    async fn reload(pool: &PgPool, id: i64) -> Result<EvaluationRow, AppError> {
        <Self as EntityStore>::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("evaluation {} missing after write", id)))
    }
}

#[async_trait]
impl EntityStore for EvaluationStore {
    type Id = i64;
    type New = NewEvaluation;
    type Row = EvaluationRow;

    async fn save(pool: &PgPool, new: &NewEvaluation) -> Result<EvaluationRow, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO evaluations (type_evaluation, date, grade, id_matriculation) \
             VALUES ($1, $2, $3, $4) RETURNING id_evaluation",
        )
        .bind(&new.type_evaluation)
        .bind(new.date)
        .bind(new.grade)
        .bind(new.id_matriculation)
        .fetch_one(pool)
        .await?;
        Self::reload(pool, id).await
    }

    async fn replace(
        pool: &PgPool,
        id: i64,
        new: &NewEvaluation,
    ) -> Result<Option<EvaluationRow>, AppError> {
        let res = sqlx::query(
            "UPDATE evaluations SET type_evaluation = $1, date = $2, grade = $3, id_matriculation = $4 \
             WHERE id_evaluation = $5",
        )
        .bind(&new.type_evaluation)
        .bind(new.date)
        .bind(new.grade)
        .bind(new.id_matriculation)
        .bind(id)
        .execute(pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Self::reload(pool, id).await?))
    }

    async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<EvaluationRow>, AppError> {
        let sql = format!("{SELECT} WHERE e.id_evaluation = $1");
        Ok(sqlx::query_as::<_, EvaluationRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<EvaluationRow>, AppError> {
        let sql = format!("{SELECT} ORDER BY e.id_evaluation");
        Ok(sqlx::query_as::<_, EvaluationRow>(&sql)
            .fetch_all(pool)
            .await?)
    }

    async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM evaluations WHERE id_evaluation = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM evaluations WHERE id_evaluation = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}
