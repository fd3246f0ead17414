use async_trait::async_trait;
use sqlx::PgPool;

use super::crud::EntityProfile;
use super::validation;
use crate::dto::course::{CourseRequest, CourseResponse};
use crate::error::AppError;
use crate::store::course::NewCourse;
use crate::store::{CourseStore, EntityStore, TeacherStore};

pub struct CourseProfile;

#[async_trait]
impl EntityProfile for CourseProfile {
    type Store = CourseStore;
    type Req = CourseRequest;
    type Res = CourseResponse;

    const ENTITY: &'static str = "Course";

    fn validate(req: &CourseRequest) -> Vec<String> {
        let mut errors = Vec::new();
        validation::require_text(&mut errors, "name", "Name", &req.name);
        validation::max_len(&mut errors, "name", "Name", &req.name, 150);
        validation::require_text(&mut errors, "code", "Code", &req.code);
        validation::max_len(&mut errors, "code", "Code", &req.code, 20);
        validation::at_least_i32(&mut errors, "credits", "Credits", req.credits, 1);
        validation::at_most_i32(&mut errors, "credits", "Credits", req.credits, 10);
        validation::at_least_i32(&mut errors, "semester", "Semester", req.semester, 1);
        validation::at_most_i32(&mut errors, "semester", "Semester", req.semester, 12);
        validation::require_id(&mut errors, "teacherId", "Teacher id", req.teacher_id);
        errors
    }

    async fn prepare(pool: &PgPool, req: &CourseRequest) -> Result<NewCourse, AppError> {
        let teacher_id = req
            .teacher_id
            .ok_or_else(|| AppError::Business("Teacher id is required".into()))?;
        if !TeacherStore::exists_by_id(pool, teacher_id).await? {
            return Err(AppError::NotFound(format!(
                "Teacher not found with id {teacher_id}"
            )));
        }
        Ok(NewCourse {
            name: req.name.clone(),
            code: req.code.clone(),
            credits: req.credits,
            semester: req.semester,
            id_teacher: teacher_id,
        })
    }

    fn present(row: <CourseStore as EntityStore>::Row) -> CourseResponse {
        CourseResponse::from_row(row)
    }
}
