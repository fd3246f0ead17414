use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::evaluation::EvaluationRow;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default)]
    pub type_evaluation: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub matriculation_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub id_evaluation: i64,
    pub type_evaluation: Option<String>,
    pub date: Option<NaiveDate>,
    pub grade: f64,
    pub matriculation_id: i64,
    pub student_name: String,
    pub student_surname: String,
    pub course_name: String,
    pub course_code: String,
}

impl EvaluationResponse {
    pub fn from_row(row: EvaluationRow) -> Self {
        EvaluationResponse {
            id_evaluation: row.id_evaluation,
            type_evaluation: row.type_evaluation,
            date: row.date,
            grade: row.grade,
            matriculation_id: row.id_matriculation,
            student_name: row.student_name,
            student_surname: row.student_surname,
            course_name: row.course_name,
            course_code: row.course_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_grade_and_chained_display_fields() {
        let row = EvaluationRow {
            id_evaluation: 5,
            type_evaluation: Some("final".into()),
            date: None,
            grade: 17.5,
            id_matriculation: 11,
            student_name: "Ana".into(),
            student_surname: "Lopez".into(),
            course_name: "Algebra".into(),
            course_code: "ALG1".into(),
        };
        let res = EvaluationResponse::from_row(row);
        assert_eq!(res.grade, 17.5);
        assert_eq!(res.matriculation_id, 11);

        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v["idEvaluation"], 5);
        assert_eq!(v["typeEvaluation"], "final");
        assert_eq!(v["studentSurname"], "Lopez");
    }
}
