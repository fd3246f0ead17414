use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::matriculation::MatriculationRow;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculationRequest {
    #[serde(default)]
    pub academic_period: String,
    #[serde(default)]
    pub matriculation_date: Option<NaiveDate>,
    #[serde(default)]
    pub matriculation_status: Option<String>,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub course_id: Option<i64>,
}

/// Carries the referenced student's and course's display fields alongside
/// their ids; these projections are read-only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculationResponse {
    pub id_matriculation: i64,
    pub academic_period: String,
    pub matriculation_date: Option<NaiveDate>,
    pub matriculation_status: Option<String>,
    pub student_id: i64,
    pub course_id: i64,
    pub student_name: String,
    pub student_surname: String,
    pub course_name: String,
    pub course_code: String,
}

impl MatriculationResponse {
    pub fn from_row(row: MatriculationRow) -> Self {
        MatriculationResponse {
            id_matriculation: row.id_matriculation,
            academic_period: row.academic_period,
            matriculation_date: row.matriculation_date,
            matriculation_status: row.matriculation_status,
            student_id: row.id_student,
            course_id: row.id_course,
            student_name: row.student_name,
            student_surname: row.student_surname,
            course_name: row.course_name,
            course_code: row.course_code,
        }
    }
}
