use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::student::StudentRow;

/// Required text fields default to "" when absent so a missing field is
/// reported through the validation list rather than a deserialize error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id_student: i64,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl StudentResponse {
    pub fn from_row(row: StudentRow) -> Self {
        StudentResponse {
            id_student: row.id_student,
            name: row.name,
            surname: row.surname,
            dni: row.dni,
            email: row.email,
            phone: row.phone,
            address: row.address,
            birth_date: row.birth_date,
            enrollment_date: row.enrollment_date,
            status: row.status,
        }
    }
}
