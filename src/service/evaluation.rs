use async_trait::async_trait;
use sqlx::PgPool;

use super::crud::EntityProfile;
use super::validation;
use crate::dto::evaluation::{EvaluationRequest, EvaluationResponse};
use crate::error::AppError;
use crate::store::evaluation::NewEvaluation;
use crate::store::{EntityStore, EvaluationStore, MatriculationStore};

pub struct EvaluationProfile;

#[async_trait]
impl EntityProfile for EvaluationProfile {
    type Store = EvaluationStore;
    type Req = EvaluationRequest;
    type Res = EvaluationResponse;

    const ENTITY: &'static str = "Evaluation";

    fn validate(req: &EvaluationRequest) -> Vec<String> {
        let mut errors = Vec::new();
        validation::max_len_opt(
            &mut errors,
            "typeEvaluation",
            "Evaluation type",
            req.type_evaluation.as_deref(),
            50,
        );
        validation::at_most_f64(&mut errors, "grade", "Grade", req.grade, 20.0);
        validation::require_id(
            &mut errors,
            "matriculationId",
            "Matriculation id",
            req.matriculation_id,
        );
        errors
    }

    /// A missing or negative grade is a business rule rather than a field
    /// error; only the upper bound is reported through the validation list.
    async fn prepare(pool: &PgPool, req: &EvaluationRequest) -> Result<NewEvaluation, AppError> {
        let grade = req
            .grade
            .ok_or_else(|| AppError::Business("Grade is required".into()))?;
        if grade < 0.0 {
            return Err(AppError::Business("Grade cannot be negative".into()));
        }
        let matriculation_id = req
            .matriculation_id
            .ok_or_else(|| AppError::Business("Matriculation id is required".into()))?;
        if !MatriculationStore::exists_by_id(pool, matriculation_id).await? {
            return Err(AppError::NotFound(format!(
                "Matriculation not found with id {matriculation_id}"
            )));
        }
        Ok(NewEvaluation {
            type_evaluation: req.type_evaluation.clone(),
            date: req.date,
            grade,
            id_matriculation: matriculation_id,
        })
    }

    fn present(row: <EvaluationStore as EntityStore>::Row) -> EvaluationResponse {
        EvaluationResponse::from_row(row)
    }
}
