//! The CRUD pipeline and its per-entity profiles.

pub mod crud;
pub mod validation;

pub mod course;
pub mod evaluation;
pub mod matriculation;
pub mod schedule;
pub mod student;
pub mod teacher;

pub use crud::{CrudService, EntityProfile};

pub use course::CourseProfile;
pub use evaluation::EvaluationProfile;
pub use matriculation::MatriculationProfile;
pub use schedule::ScheduleProfile;
pub use student::StudentProfile;
pub use teacher::TeacherProfile;
