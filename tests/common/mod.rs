#![allow(dead_code)]

use axum_test::TestServer;
use catalog::core::db::connect_in_memory;
use catalog::core::{AlbumState, BookState};
use std::sync::Arc;

/// Crea un TestServer del servizio libri su un database SQLite in memoria
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste, con la tabella `book` vuota
pub async fn create_book_server() -> TestServer {
    let pool = connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    let state = Arc::new(BookState::new(pool));
    state
        .book
        .create_table()
        .await
        .expect("Failed to create book table");

    TestServer::new(catalog::create_book_router(state)).expect("Failed to create test server")
}

/// Crea un TestServer del servizio album su un database SQLite in memoria
pub async fn create_album_server() -> TestServer {
    let pool = connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    let state = Arc::new(AlbumState::new(pool));
    state
        .album
        .create_table()
        .await
        .expect("Failed to create album table");

    TestServer::new(catalog::create_album_router(state)).expect("Failed to create test server")
}
