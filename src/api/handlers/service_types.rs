use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{CreateServiceTypeRequest, ServiceType, UpdateServiceTypeRequest},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ServiceType>>> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(20);

    let types = state.context.service_type_repo.find_all(page, limit).await?;
    Ok(Json(types))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceType>> {
    let service_type = state
        .context
        .service_type_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service type not found".to_string()))?;
    Ok(Json(service_type))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceTypeRequest>,
) -> Result<(StatusCode, Json<ServiceType>)> {
    let created = state.context.create_service_type.execute(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceTypeRequest>,
) -> Result<Json<ServiceType>> {
    state
        .context
        .service_type_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service type not found".to_string()))?;

    let updated = state
        .context
        .service_type_repo
        .update(ServiceType {
            id,
            name: request.name,
        })
        .await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Uuid>> {
    let deleted = state.context.service_type_repo.destroy(id).await?;
    Ok(Json(deleted))
}
