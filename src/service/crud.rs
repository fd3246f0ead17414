//! Generic CRUD pipeline shared by every entity.
//!
//! An [`EntityProfile`] supplies the pieces that differ per entity: the
//! request and response shapes, field validation, and the async `prepare`
//! step that resolves referenced entities and applies business rules.
//! [`CrudService`] composes those pieces into the five operations every
//! resource exposes.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use std::fmt::Display;

use crate::error::AppError;
use crate::store::EntityStore;

#[async_trait]
pub trait EntityProfile: Send + Sync + 'static {
    type Store: EntityStore;
    type Req: DeserializeOwned + Send + Sync + 'static;
    type Res: Serialize + Send + 'static;

    /// Display name used in messages, e.g. "Student not found with id 7".
    const ENTITY: &'static str;

    /// Field-level checks. A non-empty list fails the request with the
    /// whole list attached.
    fn validate(req: &Self::Req) -> Vec<String>;

    /// Turn an accepted request into a store-ready value. Resolves
    /// referenced entities against the database and enforces business
    /// rules that need more than the payload itself.
    async fn prepare(
        pool: &PgPool,
        req: &Self::Req,
    ) -> Result<<Self::Store as EntityStore>::New, AppError>;

    fn present(row: <Self::Store as EntityStore>::Row) -> Self::Res;
}

fn not_found<P: EntityProfile>(id: impl Display) -> AppError {
    AppError::NotFound(format!("{} not found with id {}", P::ENTITY, id))
}

pub struct CrudService;

impl CrudService {
    pub async fn create<P: EntityProfile>(pool: &PgPool, req: P::Req) -> Result<P::Res, AppError> {
        let errors = P::validate(&req);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        let new = P::prepare(pool, &req).await?;
        let row = <P::Store as EntityStore>::save(pool, &new).await?;
        tracing::debug!(entity = P::ENTITY, "created");
        Ok(P::present(row))
    }

    pub async fn get_by_id<P: EntityProfile>(
        pool: &PgPool,
        id: <P::Store as EntityStore>::Id,
    ) -> Result<P::Res, AppError> {
        match <P::Store as EntityStore>::find_by_id(pool, id).await? {
            Some(row) => Ok(P::present(row)),
            None => Err(not_found::<P>(id)),
        }
    }

    pub async fn get_all<P: EntityProfile>(pool: &PgPool) -> Result<Vec<P::Res>, AppError> {
        let rows = <P::Store as EntityStore>::find_all(pool).await?;
        Ok(rows.into_iter().map(P::present).collect())
    }

    /// Full replacement. The addressed row must exist before the payload
    /// is prepared, so a bad id reports NotFound rather than a reference
    /// error from the payload.
    pub async fn update<P: EntityProfile>(
        pool: &PgPool,
        id: <P::Store as EntityStore>::Id,
        req: P::Req,
    ) -> Result<P::Res, AppError> {
        let errors = P::validate(&req);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        if !<P::Store as EntityStore>::exists_by_id(pool, id).await? {
            return Err(not_found::<P>(id));
        }
        let new = P::prepare(pool, &req).await?;
        match <P::Store as EntityStore>::replace(pool, id, &new).await? {
            Some(row) => {
                tracing::debug!(entity = P::ENTITY, %id, "updated");
                Ok(P::present(row))
            }
            // Deleted between the existence check and the write.
            None => Err(not_found::<P>(id)),
        }
    }

    pub async fn delete<P: EntityProfile>(
        pool: &PgPool,
        id: <P::Store as EntityStore>::Id,
    ) -> Result<(), AppError> {
        let removed = <P::Store as EntityStore>::delete_by_id(pool, id).await?;
        if removed == 0 {
            return Err(not_found::<P>(id));
        }
        tracing::debug!(entity = P::ENTITY, %id, "deleted");
        Ok(())
    }
}
