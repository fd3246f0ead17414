//! Schedule rows and persistence. Rows join the owning course.

use super::EntityStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveTime;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct ScheduleRow {
    pub id_schedule: i64,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub classroom: Option<String>,
    pub id_course: i64,
    pub course_name: String,
    pub course_code: String,
}

#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub classroom: Option<String>,
    pub id_course: i64,
}

const SELECT: &str = "SELECT sc.id_schedule, sc.day_of_week, sc.start_time, sc.end_time, sc.classroom, \
     sc.id_course, c.name AS course_name, c.code AS course_code \
     FROM schedules sc JOIN courses c ON c.id_course = sc.id_course";

pub struct ScheduleStore;

impl ScheduleStore {
    async fn reload(pool: &PgPool, id: i64) -> Result<ScheduleRow, AppError> {
        <Self as EntityStore>::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("schedule {} missing after write", id)))
    }
}

#[async_trait]
impl EntityStore for ScheduleStore {
    type Id = i64;
    type New = NewSchedule;
    type Row = ScheduleRow;

    async fn save(pool: &PgPool, new: &NewSchedule) -> Result<ScheduleRow, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO schedules (day_of_week, start_time, end_time, classroom, id_course) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id_schedule",
        )
        .bind(&new.day_of_week)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(&new.classroom)
        .bind(new.id_course)
        .fetch_one(pool)
        .await?;
        Self::reload(pool, id).await
    }

    async fn replace(pool: &PgPool, id: i64, new: &NewSchedule) -> Result<Option<ScheduleRow>, AppError> {
        let res = sqlx::query(
            "UPDATE schedules SET day_of_week = $1, start_time = $2, end_time = $3, classroom = $4, \
             id_course = $5 WHERE id_schedule = $6",
        )
        .bind(&new.day_of_week)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(&new.classroom)
        .bind(new.id_course)
        .bind(id)
        .execute(pool)
        .await?;
        if res.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Self::reload(pool, id).await?))
    }

    async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ScheduleRow>, AppError> {
        let sql = format!("{SELECT} WHERE sc.id_schedule = $1");
        Ok(sqlx::query_as::<_, ScheduleRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<ScheduleRow>, AppError> {
        let sql = format!("{SELECT} ORDER BY sc.id_schedule");
        Ok(sqlx::query_as::<_, ScheduleRow>(&sql).fetch_all(pool).await?)
    }

    async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM schedules WHERE id_schedule = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, AppError> {
        let res = sqlx::query("DELETE FROM schedules WHERE id_schedule = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(res.rows_affected())
    }
}
