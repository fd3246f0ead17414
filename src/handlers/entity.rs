//! Generic axum handlers, instantiated per entity in the route table.
//! Every handler returns the success envelope; failures propagate as
//! [`AppError`] and render through its `IntoResponse` impl.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::response::ApiSuccess;
use crate::service::{CrudService, EntityProfile};
use crate::state::AppState;
use crate::store::EntityStore;

type Id<P> = <<P as EntityProfile>::Store as EntityStore>::Id;

pub async fn list<P: EntityProfile>(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<Vec<P::Res>>>, AppError> {
    let data = CrudService::get_all::<P>(&state.pool).await?;
    Ok(Json(ApiSuccess::new(
        format!("{}s retrieved successfully", P::ENTITY),
        data,
    )))
}

pub async fn create<P: EntityProfile>(
    State(state): State<AppState>,
    Json(req): Json<P::Req>,
) -> Result<(StatusCode, Json<ApiSuccess<P::Res>>), AppError> {
    let data = CrudService::create::<P>(&state.pool, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiSuccess::new(
            format!("{} created successfully", P::ENTITY),
            data,
        )),
    ))
}

pub async fn read<P: EntityProfile>(
    State(state): State<AppState>,
    Path(id): Path<Id<P>>,
) -> Result<Json<ApiSuccess<P::Res>>, AppError> {
    let data = CrudService::get_by_id::<P>(&state.pool, id).await?;
    Ok(Json(ApiSuccess::new(
        format!("{} retrieved successfully", P::ENTITY),
        data,
    )))
}

pub async fn update<P: EntityProfile>(
    State(state): State<AppState>,
    Path(id): Path<Id<P>>,
    Json(req): Json<P::Req>,
) -> Result<Json<ApiSuccess<P::Res>>, AppError> {
    let data = CrudService::update::<P>(&state.pool, id, req).await?;
    Ok(Json(ApiSuccess::new(
        format!("{} updated successfully", P::ENTITY),
        data,
    )))
}

pub async fn remove<P: EntityProfile>(
    State(state): State<AppState>,
    Path(id): Path<Id<P>>,
) -> Result<StatusCode, AppError> {
    CrudService::delete::<P>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
