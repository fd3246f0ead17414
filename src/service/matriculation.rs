use async_trait::async_trait;
use sqlx::PgPool;

use super::crud::EntityProfile;
use super::validation;
use crate::dto::matriculation::{MatriculationRequest, MatriculationResponse};
use crate::error::AppError;
use crate::store::matriculation::NewMatriculation;
use crate::store::{CourseStore, EntityStore, MatriculationStore, StudentStore};

pub struct MatriculationProfile;

#[async_trait]
impl EntityProfile for MatriculationProfile {
    type Store = MatriculationStore;
    type Req = MatriculationRequest;
    type Res = MatriculationResponse;

    const ENTITY: &'static str = "Matriculation";

    fn validate(req: &MatriculationRequest) -> Vec<String> {
        let mut errors = Vec::new();
        validation::require_text(
            &mut errors,
            "academicPeriod",
            "Academic period",
            &req.academic_period,
        );
        validation::max_len(
            &mut errors,
            "academicPeriod",
            "Academic period",
            &req.academic_period,
            20,
        );
        validation::max_len_opt(
            &mut errors,
            "matriculationStatus",
            "Matriculation status",
            req.matriculation_status.as_deref(),
            20,
        );
        validation::require_id(&mut errors, "studentId", "Student id", req.student_id);
        validation::require_id(&mut errors, "courseId", "Course id", req.course_id);
        errors
    }

    /// The student is resolved before the course, so when both references
    /// are dangling the response names the student.
    async fn prepare(pool: &PgPool, req: &MatriculationRequest) -> Result<NewMatriculation, AppError> {
        let student_id = req
            .student_id
            .ok_or_else(|| AppError::Business("Student id is required".into()))?;
        let course_id = req
            .course_id
            .ok_or_else(|| AppError::Business("Course id is required".into()))?;
        if !StudentStore::exists_by_id(pool, student_id).await? {
            return Err(AppError::NotFound(format!(
                "Student not found with id {student_id}"
            )));
        }
        if !CourseStore::exists_by_id(pool, course_id).await? {
            return Err(AppError::NotFound(format!(
                "Course not found with id {course_id}"
            )));
        }
        Ok(NewMatriculation {
            academic_period: req.academic_period.clone(),
            matriculation_date: req.matriculation_date,
            matriculation_status: req.matriculation_status.clone(),
            id_student: student_id,
            id_course: course_id,
        })
    }

    fn present(row: <MatriculationStore as EntityStore>::Row) -> MatriculationResponse {
        MatriculationResponse::from_row(row)
    }
}
