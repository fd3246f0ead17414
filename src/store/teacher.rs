//! Teacher rows and persistence.

use super::EntityStore;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct TeacherRow {
    pub id_teacher: i64,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
}

const COLUMNS: &str = "id_teacher, name, surname, dni, email, phone, specialty, status";

pub struct TeacherStore;

#[async_trait]
impl EntityStore for TeacherStore {
    type Id = i64;
    type New = NewTeacher;
    type Row = TeacherRow;

    async fn save(pool: &PgPool, new: &NewTeacher) -> Result<TeacherRow, AppError> {
        let sql = format!(
            "INSERT INTO teachers (name, surname, dni, email, phone, specialty, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TeacherRow>(&sql)
            .bind(&new.name)
            .bind(&new.surname)
            .bind(&new.dni)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.specialty)
            .bind(&new.status)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    async fn replace(pool: &PgPool, id: i64, new: &NewTeacher) -> Result<Option<TeacherRow>, AppError> {
        let sql = format!(
            "UPDATE teachers SET name = $1, surname = $2, dni = $3, email = $4, phone = $5, \
             specialty = $6, status = $7 WHERE id_teacher = $8 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TeacherRow>(&sql)
            .bind(&new.name)
            .bind(&new.surname)
            .bind(&new.dni)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.specialty)
            .bind(&new.status)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<TeacherRow>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM teachers WHERE id_teacher = $1");
        Ok(sqlx::query_as::<_, TeacherRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<TeacherRow>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM teachers ORDER BY id_teacher");
        Ok(sqlx::query_as::<_, TeacherRow>(&sql).fetch_all(pool).await?)
    }

    async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM teachers WHERE id_teacher = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM teachers WHERE id_teacher = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}
