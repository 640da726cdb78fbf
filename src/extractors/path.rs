use axum::extract::FromRequestParts;

use crate::AppError;

/// `axum::extract::Path` whose rejections render as `AppError::BadRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
