use async_trait::async_trait;
use sqlx::PgPool;

use super::crud::EntityProfile;
use super::validation;
use crate::dto::student::{StudentRequest, StudentResponse};
use crate::error::AppError;
use crate::store::student::NewStudent;
use crate::store::StudentStore;

pub struct StudentProfile;

#[async_trait]
impl EntityProfile for StudentProfile {
    type Store = StudentStore;
    type Req = StudentRequest;
    type Res = StudentResponse;

    const ENTITY: &'static str = "Student";

    fn validate(req: &StudentRequest) -> Vec<String> {
        let mut errors = Vec::new();
        validation::require_text(&mut errors, "name", "Name", &req.name);
        validation::max_len(&mut errors, "name", "Name", &req.name, 100);
        validation::require_text(&mut errors, "surname", "Surname", &req.surname);
        validation::max_len(&mut errors, "surname", "Surname", &req.surname, 100);
        // A blank DNI is a business rule, checked in prepare.
        validation::max_len(&mut errors, "dni", "DNI", &req.dni, 20);
        validation::require_text(&mut errors, "email", "Email", &req.email);
        validation::email(&mut errors, "email", &req.email);
        validation::max_len(&mut errors, "email", "Email", &req.email, 150);
        validation::max_len_opt(&mut errors, "phone", "Phone", req.phone.as_deref(), 20);
        validation::max_len_opt(&mut errors, "address", "Address", req.address.as_deref(), 255);
        validation::max_len_opt(&mut errors, "status", "Status", req.status.as_deref(), 20);
        errors
    }

    async fn prepare(_pool: &PgPool, req: &StudentRequest) -> Result<NewStudent, AppError> {
        if req.dni.trim().is_empty() {
            return Err(AppError::Business("DNI is required".into()));
        }
        Ok(NewStudent {
            name: req.name.clone(),
            surname: req.surname.clone(),
            dni: req.dni.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            address: req.address.clone(),
            birth_date: req.birth_date,
            enrollment_date: req.enrollment_date,
            status: req.status.clone(),
        })
    }

    fn present(row: <StudentStore as crate::store::EntityStore>::Row) -> StudentResponse {
        StudentResponse::from_row(row)
    }
}
