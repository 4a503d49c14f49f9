use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Lacquer API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Service tracker for nail salons",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "service_types": "/service-types",
            "services": "/services",
            "services_packs": "/services-packs"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
