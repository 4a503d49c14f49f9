use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{CreateServicesPackRequest, ServiceCountEntry, ServicesPack},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct UpdateServicesPackRequest {
    pub customer: String,
    pub price_cents: i64,
    pub start_date: DateTime<Utc>,
    pub services_count: Vec<ServiceCountEntry>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServicesPack>>> {
    let packs = state.context.services_pack_repo.find_all().await?;
    Ok(Json(packs))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServicesPack>> {
    let pack = state
        .context
        .services_pack_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Services pack not found".to_string()))?;
    Ok(Json(pack))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateServicesPackRequest>,
) -> Result<(StatusCode, Json<ServicesPack>)> {
    let created = state.context.create_services_pack.execute(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServicesPackRequest>,
) -> Result<Json<ServicesPack>> {
    state
        .context
        .services_pack_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Services pack not found".to_string()))?;

    let updated = state
        .context
        .services_pack_repo
        .update(ServicesPack {
            id,
            customer: request.customer,
            price_cents: request.price_cents,
            start_date: request.start_date,
            services_count: request.services_count,
            services: None,
        })
        .await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Uuid>> {
    let deleted = state.context.services_pack_repo.destroy(id).await?;
    Ok(Json(deleted))
}
