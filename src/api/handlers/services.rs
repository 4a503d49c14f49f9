use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{CreateServiceRequest, Service},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Any date within the requested month, e.g. "2026-08-01".
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceRequest {
    pub customer: String,
    pub date: DateTime<Utc>,
    pub services_done_ids: Vec<Uuid>,
    pub price_cents: i64,
    pub is_from_pack: bool,
    pub image: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Service>>> {
    let services = state.context.service_repo.find_all().await?;
    Ok(Json(services))
}

pub async fn list_by_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<Service>>> {
    let services = state.context.service_repo.find_by_month(query.date).await?;
    Ok(Json(services))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>> {
    let service = state
        .context
        .service_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
    Ok(Json(service))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>)> {
    let created = state.context.create_service.execute(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Service>> {
    state
        .context
        .service_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    let updated = state
        .context
        .service_repo
        .update(Service {
            id,
            customer: request.customer,
            services_done_ids: request.services_done_ids,
            services_done: None,
            date: request.date,
            price_cents: request.price_cents,
            is_from_pack: request.is_from_pack,
            image: request.image,
        })
        .await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Uuid>> {
    let deleted = state.context.delete_service.execute(id).await?;
    Ok(Json(deleted))
}

/// Attaches an uploaded image to an existing service. The storage
/// provider yields the URL; the service document is then replaced
/// with the new image field set.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Service>> {
    let service = state
        .context
        .service_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    let mut uploaded_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::Validation("Missing filename".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {}", e)))?;

        uploaded_url = Some(state.storage.save(&filename, &data).await?);
    }

    let image =
        uploaded_url.ok_or_else(|| AppError::Validation("Missing 'image' field".to_string()))?;

    let updated = state
        .context
        .service_repo
        .update(Service {
            image: Some(image),
            services_done: None,
            ..service
        })
        .await?;

    Ok(Json(updated))
}
