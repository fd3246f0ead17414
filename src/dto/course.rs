use serde::{Deserialize, Serialize};

use crate::store::course::CourseRow;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub credits: Option<i32>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id_course: i64,
    pub name: String,
    pub code: String,
    pub credits: Option<i32>,
    pub semester: Option<i32>,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub teacher_surname: String,
}

impl CourseResponse {
    pub fn from_row(row: CourseRow) -> Self {
        CourseResponse {
            id_course: row.id_course,
            name: row.name,
            code: row.code,
            credits: row.credits,
            semester: row.semester,
            teacher_id: row.id_teacher,
            teacher_name: row.teacher_name,
            teacher_surname: row.teacher_surname,
        }
    }
}
