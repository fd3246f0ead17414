use async_trait::async_trait;
use sqlx::PgPool;

use super::crud::EntityProfile;
use super::validation;
use crate::dto::teacher::{TeacherRequest, TeacherResponse};
use crate::error::AppError;
use crate::store::teacher::NewTeacher;
use crate::store::TeacherStore;

pub struct TeacherProfile;

#[async_trait]
impl EntityProfile for TeacherProfile {
    type Store = TeacherStore;
    type Req = TeacherRequest;
    type Res = TeacherResponse;

    const ENTITY: &'static str = "Teacher";

    fn validate(req: &TeacherRequest) -> Vec<String> {
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
        validation::max_len_opt(&mut errors, "specialty", "Specialty", req.specialty.as_deref(), 100);
        validation::max_len_opt(&mut errors, "status", "Status", req.status.as_deref(), 20);
        errors
    }

    async fn prepare(_pool: &PgPool, req: &TeacherRequest) -> Result<NewTeacher, AppError> {
        if req.dni.trim().is_empty() {
            return Err(AppError::Business("DNI is required".into()));
        }
        Ok(NewTeacher {
            name: req.name.clone(),
            surname: req.surname.clone(),
            dni: req.dni.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            specialty: req.specialty.clone(),
            status: req.status.clone(),
        })
    }

    fn present(row: <TeacherStore as crate::store::EntityStore>::Row) -> TeacherResponse {
        TeacherResponse::from_row(row)
    }
}
