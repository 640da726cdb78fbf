use axum::{
    extract::{Request, State},
    http::HeaderName,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::{AppError, AppState};

pub const ADMIN_KEY_HEADER: HeaderName = HeaderName::from_static("x-admin-key");

/// Middleware that requires `X-Admin-Key` to match the configured `ADMIN_KEY`.
/// With no key configured every admin request is rejected.
pub async fn require_admin_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected_key) = state.config.admin_key.as_deref() else {
        return Err(AppError::Unauthorized(
            "Admin endpoints are disabled".to_string(),
        ));
    };

    let provided_key = request
        .headers()
        .get(&ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(format!("Missing {} header", ADMIN_KEY_HEADER)))?;

    // Constant-time comparison
    if expected_key.as_bytes().ct_eq(provided_key.as_bytes()).into() {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(path = %request.uri().path(), "Rejected admin request with wrong key");
        Err(AppError::Unauthorized("Invalid admin key".to_string()))
    }
}
