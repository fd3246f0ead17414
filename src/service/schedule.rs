use async_trait::async_trait;
use sqlx::PgPool;

use super::crud::EntityProfile;
use super::validation;
use crate::dto::schedule::{ScheduleRequest, ScheduleResponse};
use crate::error::AppError;
use crate::store::schedule::NewSchedule;
use crate::store::{CourseStore, EntityStore, ScheduleStore};

pub struct ScheduleProfile;

#[async_trait]
impl EntityProfile for ScheduleProfile {
    type Store = ScheduleStore;
    type Req = ScheduleRequest;
    type Res = ScheduleResponse;

    const ENTITY: &'static str = "Schedule";

    fn validate(req: &ScheduleRequest) -> Vec<String> {
        let mut errors = Vec::new();
        validation::require_text(&mut errors, "dayOfWeek", "Day of week", &req.day_of_week);
        validation::max_len(&mut errors, "dayOfWeek", "Day of week", &req.day_of_week, 20);
        validation::require_some(&mut errors, "startTime", "Start time", &req.start_time);
        validation::require_some(&mut errors, "endTime", "End time", &req.end_time);
        validation::max_len_opt(
            &mut errors,
            "classroom",
            "Classroom",
            req.classroom.as_deref(),
            50,
        );
        validation::require_id(&mut errors, "courseId", "Course id", req.course_id);
        errors
    }

    async fn prepare(pool: &PgPool, req: &ScheduleRequest) -> Result<NewSchedule, AppError> {
        let start_time = req
            .start_time
            .ok_or_else(|| AppError::Business("Start time is required".into()))?;
        let end_time = req
            .end_time
            .ok_or_else(|| AppError::Business("End time is required".into()))?;
        if end_time <= start_time {
            return Err(AppError::Business(
                "End time must be after start time".into(),
            ));
        }
        let course_id = req
            .course_id
            .ok_or_else(|| AppError::Business("Course id is required".into()))?;
        if !CourseStore::exists_by_id(pool, course_id).await? {
            return Err(AppError::NotFound(format!(
                "Course not found with id {course_id}"
            )));
        }
        Ok(NewSchedule {
            day_of_week: req.day_of_week.clone(),
            start_time,
            end_time,
            classroom: req.classroom.clone(),
            id_course: course_id,
        })
    }

    fn present(row: <ScheduleStore as EntityStore>::Row) -> ScheduleResponse {
        ScheduleResponse::from_row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn missing_times_are_field_errors() {
        let req = ScheduleRequest {
            day_of_week: "Monday".into(),
            start_time: None,
            end_time: None,
            classroom: None,
            course_id: Some(1),
        };
        let errors = ScheduleProfile::validate(&req);
        assert_eq!(
            errors,
            vec![
                "startTime: Start time is required",
                "endTime: End time is required"
            ]
        );
    }

    #[test]
    fn complete_request_has_no_errors() {
        let req = ScheduleRequest {
            day_of_week: "Monday".into(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0),
            end_time: NaiveTime::from_hms_opt(10, 0, 0),
            classroom: Some("B-204".into()),
            course_id: Some(1),
        };
        assert!(ScheduleProfile::validate(&req).is_empty());
    }
}
