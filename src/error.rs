//! Typed errors and HTTP mapping.
//!
//! Every failure in the service path is one of these variants; translation
//! to a transport status code happens only here, at the axum boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ApiError;

#[derive(Error, Debug)]
pub enum AppError {
    /// The addressed entity, or a referenced entity, does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A business rule rejected the request (blank DNI, negative grade).
    #[error("{0}")]
    Business(String),
    /// Declared field constraints failed; carries one message per field.
    #[error("Validation failed")]
    Validation(Vec<String>),
    /// A store uniqueness or integrity constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Business(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Numeric error class carried in the envelope (matches the status code).
    pub fn error_type(&self) -> u16 {
        self.status().as_u16()
    }

    /// Message safe to put on the wire. Persistence failures are collapsed
    /// to a generic message so no internal detail leaks.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Db(_) | AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    fn into_validations(self) -> Option<Vec<String>> {
        match self {
            AppError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

/// Normalize store constraint violations: a race that slips past the
/// service-level existence checks surfaces as Conflict, not a raw DB error.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AppError::Conflict("Duplicate value violates a unique constraint".to_string());
            }
            if db.is_foreign_key_violation() {
                return AppError::Conflict("Referenced entity constraint violated".to_string());
            }
        }
        AppError::Db(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ApiError {
            success: false,
            message: self.public_message(),
            error_type: status.as_u16(),
            validations: self.into_validations(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Teacher not found with id 7".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), 404);
        assert_eq!(err.public_message(), "Teacher not found with id 7");
    }

    #[test]
    fn business_maps_to_400() {
        let err = AppError::Business("Grade cannot be negative".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Grade cannot be negative");
    }

    #[test]
    fn validation_maps_to_422_with_field_messages() {
        let err = AppError::Validation(vec!["name: Name is required".into()]);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.public_message(), "Validation failed");
        assert_eq!(
            err.into_validations(),
            Some(vec!["name: Name is required".to_string()])
        );
    }

    #[test]
    fn conflict_maps_to_409() {
        assert_eq!(AppError::Conflict("dup".into()).error_type(), 409);
    }

    #[test]
    fn database_errors_do_not_leak_detail() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }
}
