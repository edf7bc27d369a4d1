//! Custom Axum extractors

use axum::extract::FromRequest;

use super::errors::ApiError;

/// JSON body extractor whose rejections render as `ApiError` (400 with an
/// `error` field) instead of axum's plain-text responses
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
