pub mod handlers;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{config::Settings, storage::StorageProvider, usecase::UseCaseContext};
use state::AppState;

pub fn create_app(
    context: Arc<UseCaseContext>,
    storage: Arc<dyn StorageProvider>,
    settings: Arc<Settings>,
) -> Router {
    let app_state = AppState::new(context, storage, settings);

    Router::new()
        // Root and health endpoints (no auth)
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        // Entity routes
        .nest("/service-types", service_type_routes(app_state.clone()))
        .nest("/services", service_routes(app_state.clone()))
        .nest("/services-packs", services_pack_routes(app_state.clone()))
        // Add state to the router
        .with_state(app_state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive()) // Configure properly for production
        .layer(TraceLayer::new_for_http())
}

fn service_type_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::service_types::list))
        .route("/", post(handlers::service_types::create))
        .route("/:id", get(handlers::service_types::get))
        .route("/:id", put(handlers::service_types::update))
        .route("/:id", delete(handlers::service_types::delete))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

fn service_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::services::list))
        .route("/", post(handlers::services::create))
        .route("/month", get(handlers::services::list_by_month))
        .route("/:id", get(handlers::services::get))
        .route("/:id", put(handlers::services::update))
        .route("/:id", delete(handlers::services::delete))
        .route("/:id/image", post(handlers::services::upload_image))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

fn services_pack_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::services_packs::list))
        .route("/", post(handlers::services_packs::create))
        .route("/:id", get(handlers::services_packs::get))
        .route("/:id", put(handlers::services_packs::update))
        .route("/:id", delete(handlers::services_packs::delete))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}
