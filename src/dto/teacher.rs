use serde::{Deserialize, Serialize};

use crate::store::teacher::TeacherRow;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRequest {
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
    pub specialty: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id_teacher: i64,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
}

impl TeacherResponse {
    pub fn from_row(row: TeacherRow) -> Self {
        TeacherResponse {
            id_teacher: row.id_teacher,
            name: row.name,
            surname: row.surname,
            dni: row.dni,
            email: row.email,
            phone: row.phone,
            specialty: row.specialty,
            status: row.status,
        }
    }
}
