use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::extractors::AppJson;
use crate::api::state::AppState;
use crate::domain::album::Album;

/// Message returned whenever an identifier matches no album
pub const ALBUM_NOT_FOUND: &str = "альбом не найден";

/// Message returned after a successful delete
pub const ALBUM_DELETED: &str = "альбом удален";

/// Response body for delete confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List all albums
///
/// GET /albums
pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.albums.list().await?;

    Ok(Json(albums))
}

/// Get an album by ID
///
/// GET /albums/:id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let album = state
        .albums
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(ALBUM_NOT_FOUND))?;

    Ok(Json(album))
}

/// Create an album
///
/// POST /albums
///
/// The body echoes the submitted album; the identifier assigned by the
/// store is only reported through the `Location` header.
pub async fn create_album(
    State(state): State<AppState>,
    AppJson(album): AppJson<Album>,
) -> Result<Response, ApiError> {
    let id = state.albums.create(&album).await?;
    tracing::info!(album_id = %id, "album created");

    let location = format!("/albums/{}", id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(album),
    )
        .into_response())
}

/// Replace an album's title, artist and price
///
/// PUT /albums/:id
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(album): AppJson<Album>,
) -> Result<Json<Album>, ApiError> {
    let matched = state.albums.update(&id, &album).await?;
    if matched == 0 {
        return Err(ApiError::not_found(ALBUM_NOT_FOUND));
    }

    Ok(Json(album))
}

/// Delete an album
///
/// DELETE /albums/:id
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.albums.delete(&id).await?;
    if removed == 0 {
        return Err(ApiError::not_found(ALBUM_NOT_FOUND));
    }
    tracing::info!(album_id = %id, "album deleted");

    Ok(Json(MessageResponse {
        message: ALBUM_DELETED.to_string(),
    }))
}
