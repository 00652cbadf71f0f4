//! Book services - Endpoint HTTP del servizio libri

use crate::core::{AppError, BookState};
use crate::dtos::{BookDTO, BookFilter, BookPayload, CreateBookDTO, payload_from_json};
use crate::repositories::{Create, Delete, List, Read, Update};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Welcome endpoint - GET /api/
pub async fn welcome() -> &'static str {
    "Welcome to the Exemplary Book API!"
}

#[instrument(skip(state, payload))]
pub async fn create_book(
    State(state): State<Arc<BookState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BookDTO>, AppError> {
    debug!("Creating new book");
    let Json(body) = payload.inspect_err(|e| warn!("Rejected book body: {}", e))?;
    let body: BookPayload = payload_from_json(body)
        .inspect_err(|e| warn!("Rejected book body: {:?}", e))?;

    let new_book = CreateBookDTO::try_from(body).map_err(|e| {
        warn!("Book validation failed: {}", e);
        AppError::from(e)
    })?;

    let book = state.book.create(&new_book).await?;

    info!(book_id = book.id, "Book created");
    Ok(Json(BookDTO::from(book)))
}

#[instrument(skip(state))]
pub async fn read_book(
    State(state): State<Arc<BookState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookDTO>, AppError> {
    let Path(book_id) = book_id?;
    debug!("Fetching book by ID");

    let book = state.book.read(&book_id).await?.ok_or_else(|| {
        warn!("Book {} not found", book_id);
        AppError::not_found("Book not found")
    })?;

    Ok(Json(BookDTO::from(book)))
}

/// Sostituisce l'intero libro: il body viene validato come in creazione,
/// dopo aver verificato che il libro esista.
#[instrument(skip(state, payload))]
pub async fn update_book(
    State(state): State<Arc<BookState>>,
    book_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BookDTO>, AppError> {
    let Path(book_id) = book_id?;
    debug!("Updating book");

    if state.book.read(&book_id).await?.is_none() {
        warn!("Book {} not found", book_id);
        return Err(AppError::not_found("Book not found"));
    }

    let Json(body) = payload.inspect_err(|e| warn!("Rejected book body: {}", e))?;
    let body: BookPayload = payload_from_json(body)
        .inspect_err(|e| warn!("Rejected book body: {:?}", e))?;
    let replacement = CreateBookDTO::try_from(body).map_err(|e| {
        warn!("Book validation failed: {}", e);
        AppError::from(e)
    })?;

    let book = state.book.update(&book_id, &replacement).await?;

    info!("Book {} updated", book_id);
    Ok(Json(BookDTO::from(book)))
}

#[instrument(skip(state))]
pub async fn delete_book(
    State(state): State<Arc<BookState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookDTO>, AppError> {
    let Path(book_id) = book_id?;
    debug!("Deleting book");

    let book = state.book.read(&book_id).await?.ok_or_else(|| {
        warn!("Book {} not found", book_id);
        AppError::not_found("Book not found")
    })?;

    // Una cancellazione concorrente può aver già rimosso la riga
    if !state.book.delete(&book_id).await? {
        warn!("Book {} deleted concurrently", book_id);
        return Err(AppError::not_found("Book not found"));
    }

    info!("Book {} deleted", book_id);
    Ok(Json(BookDTO::from(book)))
}

#[instrument(skip(state))]
pub async fn list_books(
    State(state): State<Arc<BookState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>, // /api/books?author=...&year=...
) -> Result<Json<Vec<BookDTO>>, AppError> {
    let Query(pairs) = query.inspect_err(|e| warn!("Rejected book filters: {}", e))?;
    let filter = BookFilter::from_query_pairs(pairs).map_err(|e| {
        warn!("Invalid year filter: {}", e);
        AppError::bad_request("Invalid query parameters").with_details(format!("year: {}", e))
    })?;
    debug!("Listing books");

    let books = state.book.list(&filter).await?;

    info!("Found {} books matching filters", books.len());
    Ok(Json(books.into_iter().map(BookDTO::from).collect()))
}
