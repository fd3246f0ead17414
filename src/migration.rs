//! Database bootstrap and startup DDL: create the target database when
//! missing, then the six entity tables with their foreign keys and cascade
//! deletes. Table order follows the FK dependency chain. Idempotent
//! (IF NOT EXISTS).

use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id_student BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        surname VARCHAR(100) NOT NULL,
        dni VARCHAR(20) NOT NULL UNIQUE,
        email VARCHAR(150) NOT NULL UNIQUE,
        phone VARCHAR(20),
        address VARCHAR(255),
        birth_date DATE,
        enrollment_date DATE,
        status VARCHAR(20)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teachers (
        id_teacher BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        surname VARCHAR(100) NOT NULL,
        dni VARCHAR(20) NOT NULL UNIQUE,
        email VARCHAR(150) NOT NULL UNIQUE,
        phone VARCHAR(20),
        specialty VARCHAR(100),
        status VARCHAR(20)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS courses (
        id_course BIGSERIAL PRIMARY KEY,
        name VARCHAR(150) NOT NULL,
        code VARCHAR(20) NOT NULL UNIQUE,
        credits INTEGER,
        semester INTEGER,
        id_teacher BIGINT NOT NULL REFERENCES teachers (id_teacher) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS matriculations (
        id_matriculation BIGSERIAL PRIMARY KEY,
        academic_period VARCHAR(20) NOT NULL,
        matriculation_date DATE,
        matriculation_status VARCHAR(20),
        id_student BIGINT NOT NULL REFERENCES students (id_student) ON DELETE CASCADE,
        id_course BIGINT NOT NULL REFERENCES courses (id_course) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS evaluations (
        id_evaluation BIGSERIAL PRIMARY KEY,
        type_evaluation VARCHAR(50),
        date DATE,
        grade DOUBLE PRECISION NOT NULL,
        id_matriculation BIGINT NOT NULL REFERENCES matriculations (id_matriculation) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS schedules (
        id_schedule BIGSERIAL PRIMARY KEY,
        day_of_week VARCHAR(20) NOT NULL,
        start_time TIME NOT NULL,
        end_time TIME NOT NULL,
        classroom VARCHAR(50),
        id_course BIGINT NOT NULL REFERENCES courses (id_course) ON DELETE CASCADE
    )
    "#,
];

/// Apply the schema to the database. Safe to run on every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!(tables = TABLES.len(), "schema applied");
    Ok(())
}

/// Create the database named in `database_url` when it does not exist yet.
/// Runs CREATE DATABASE over a connection to the server's maintenance
/// database, so it must be called before the main pool is built.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {e}")))?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = opts
        .database("postgres")
        .connect()
        .await
        .map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
