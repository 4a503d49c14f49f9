use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{api::state::AppState, error::AppError};

const API_KEY_HEADER: &str = "x-api-key";

/// Header-based auth. The core never inspects anything beyond whether
/// the presented key matches the configured one.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if presented != state.settings.auth.api_key {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
