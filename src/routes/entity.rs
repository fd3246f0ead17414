//! Entity CRUD routes. Each resource instantiates the generic handlers
//! with its profile, so the route table is the only place that pairs a
//! path with an entity.

use crate::handlers::entity::{create, list, read, remove, update};
use crate::service::{
    CourseProfile, EvaluationProfile, MatriculationProfile, ScheduleProfile, StudentProfile,
    TeacherProfile,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/students",
            get(list::<StudentProfile>).post(create::<StudentProfile>),
        )
        .route(
            "/students/:id",
            get(read::<StudentProfile>)
                .put(update::<StudentProfile>)
                .delete(remove::<StudentProfile>),
        )
        .route(
            "/teachers",
            get(list::<TeacherProfile>).post(create::<TeacherProfile>),
        )
        .route(
            "/teachers/:id",
            get(read::<TeacherProfile>)
                .put(update::<TeacherProfile>)
                .delete(remove::<TeacherProfile>),
        )
        .route(
            "/courses",
            get(list::<CourseProfile>).post(create::<CourseProfile>),
        )
        .route(
            "/courses/:id",
            get(read::<CourseProfile>)
                .put(update::<CourseProfile>)
                .delete(remove::<CourseProfile>),
        )
        .route(
            "/matriculations",
            get(list::<MatriculationProfile>).post(create::<MatriculationProfile>),
        )
        .route(
            "/matriculations/:id",
            get(read::<MatriculationProfile>)
                .put(update::<MatriculationProfile>)
                .delete(remove::<MatriculationProfile>),
        )
        .route(
            "/evaluations",
            get(list::<EvaluationProfile>).post(create::<EvaluationProfile>),
        )
        .route(
            "/evaluations/:id",
            get(read::<EvaluationProfile>)
                .put(update::<EvaluationProfile>)
                .delete(remove::<EvaluationProfile>),
        )
        .route(
            "/schedules",
            get(list::<ScheduleProfile>).post(create::<ScheduleProfile>),
        )
        .route(
            "/schedules/:id",
            get(read::<ScheduleProfile>)
                .put(update::<ScheduleProfile>)
                .delete(remove::<ScheduleProfile>),
        )
        .with_state(state)
}
