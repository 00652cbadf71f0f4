//! Server library - espone i moduli dei servizi libri e album per i binari e i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AlbumState, AppError, BookState, Config, Service};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Crea il router del servizio libri
pub fn create_book_router(state: Arc<BookState>) -> Router {
    use services::book::welcome;

    Router::new()
        .route("/api/", get(welcome))
        .nest("/api", configure_book_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes CRUD dei libri
fn configure_book_routes() -> Router<Arc<BookState>> {
    use services::book::*;

    Router::new()
        .route("/book", axum::routing::post(create_book))
        .route(
            "/book/{book_id}",
            get(read_book).put(update_book).delete(delete_book),
        )
        .route("/books", get(list_books))
}

/// Crea il router del servizio album
pub fn create_album_router(state: Arc<AlbumState>) -> Router {
    use services::album::*;

    Router::new()
        .route("/", get(root))
        .route("/album", axum::routing::post(create_album))
        .route(
            "/album/{album_id}",
            get(read_album).put(update_album).delete(delete_album),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
