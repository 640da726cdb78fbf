use axum::extract::FromRequest;

use crate::AppError;

/// `axum::Json` whose rejections render as `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
