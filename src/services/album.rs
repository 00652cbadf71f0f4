//! Album services - Endpoint HTTP del servizio album

use crate::core::{AlbumState, AppError};
use crate::dtos::{AlbumDTO, AlbumPayload, CreateAlbumDTO, UpdateAlbumDTO, payload_from_json};
use crate::repositories::{Create, Delete, Read, Update};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Root endpoint - health check
pub async fn root() -> &'static str {
    "hello world!"
}

#[instrument(skip(state, payload))]
pub async fn create_album(
    State(state): State<Arc<AlbumState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AlbumDTO>, AppError> {
    debug!("Creating new album");
    // 1. Body assente o non JSON -> 400
    let Json(body) = payload.inspect_err(|e| warn!("Rejected album body: {}", e))?;
    let body: AlbumPayload = payload_from_json(body)
        .inspect_err(|e| warn!("Rejected album body: {:?}", e))?;

    // 2. title o artist mancanti -> 400
    let new_album = CreateAlbumDTO::try_from(body).map_err(|e| {
        warn!("Album validation failed: {}", e);
        AppError::from(e)
    })?;

    let album = state.album.create(&new_album).await?;

    info!(album_id = album.id, "Album created");
    Ok(Json(AlbumDTO::from(album)))
}

#[instrument(skip(state))]
pub async fn read_album(
    State(state): State<Arc<AlbumState>>,
    album_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AlbumDTO>, AppError> {
    let Path(album_id) = album_id?;
    debug!("Fetching album by ID");

    let album = state.album.read(&album_id).await?.ok_or_else(|| {
        warn!("Album {} not found", album_id);
        AppError::not_found("Album not found")
    })?;

    Ok(Json(AlbumDTO::from(album)))
}

/// Aggiorna solo i campi presenti nel body
#[instrument(skip(state, payload))]
pub async fn update_album(
    State(state): State<Arc<AlbumState>>,
    album_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AlbumDTO>, AppError> {
    debug!("Updating album");
    // Il body viene controllato prima dell'esistenza dell'album
    let Json(body) = payload.inspect_err(|e| warn!("Rejected album body: {}", e))?;
    let body: AlbumPayload = payload_from_json(body)
        .inspect_err(|e| warn!("Rejected album body: {:?}", e))?;
    let Path(album_id) = album_id?;

    if state.album.read(&album_id).await?.is_none() {
        warn!("Album {} not found", album_id);
        return Err(AppError::not_found("Album not found"));
    }

    let changes = UpdateAlbumDTO::try_from(body).map_err(|e| {
        warn!("Album validation failed: {}", e);
        AppError::from(e)
    })?;

    let album = state.album.update(&album_id, &changes).await?;

    info!("Album {} updated", album_id);
    Ok(Json(AlbumDTO::from(album)))
}

#[instrument(skip(state))]
pub async fn delete_album(
    State(state): State<Arc<AlbumState>>,
    album_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AlbumDTO>, AppError> {
    let Path(album_id) = album_id?;
    debug!("Deleting album");

    let album = state.album.read(&album_id).await?.ok_or_else(|| {
        warn!("Album {} not found", album_id);
        AppError::not_found("Album not found")
    })?;

    if !state.album.delete(&album_id).await? {
        warn!("Album {} deleted concurrently", album_id);
        return Err(AppError::not_found("Album not found"));
    }

    info!("Album {} deleted", album_id);
    Ok(Json(AlbumDTO::from(album)))
}
