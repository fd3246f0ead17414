//! Student rows and persistence.

use super::EntityStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id_student: i64,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<String>,
}

const COLUMNS: &str =
    "id_student, name, surname, dni, email, phone, address, birth_date, enrollment_date, status";

pub struct StudentStore;

#[async_trait]
impl EntityStore for StudentStore {
    type Id = i64;
    type New = NewStudent;
    type Row = StudentRow;

    async fn save(pool: &PgPool, new: &NewStudent) -> Result<StudentRow, AppError> {
        let sql = format!(
            "INSERT INTO students (name, surname, dni, email, phone, address, birth_date, enrollment_date, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, StudentRow>(&sql)
            .bind(&new.name)
            .bind(&new.surname)
            .bind(&new.dni)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.address)
            .bind(new.birth_date)
            .bind(new.enrollment_date)
            .bind(&new.status)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    async fn replace(pool: &PgPool, id: i64, new: &NewStudent) -> Result<Option<StudentRow>, AppError> {
        let sql = format!(
            "UPDATE students SET name = $1, surname = $2, dni = $3, email = $4, phone = $5, \
             address = $6, birth_date = $7, enrollment_date = $8, status = $9 \
             WHERE id_student = $10 RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, StudentRow>(&sql)
            .bind(&new.name)
            .bind(&new.surname)
            .bind(&new.dni)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.address)
            .bind(new.birth_date)
            .bind(new.enrollment_date)
            .bind(&new.status)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<StudentRow>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM students WHERE id_student = $1");
        Ok(sqlx::query_as::<_, StudentRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<StudentRow>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM students ORDER BY id_student");
        Ok(sqlx::query_as::<_, StudentRow>(&sql).fetch_all(pool).await?)
    }

    async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM students WHERE id_student = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM students WHERE id_student = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}
