//! Application State - Stato dei due servizi
//!
//! Ogni servizio riceve il proprio stato con il repository della sua entità,
//! costruito all'avvio e condiviso tra tutte le route tramite `Arc`.

use crate::repositories::{AlbumRepository, BookRepository};
use sqlx::SqlitePool;

/// Stato del servizio libri
pub struct BookState {
    /// Repository per la gestione dei libri
    pub book: BookRepository,
}

impl BookState {
    /// Crea lo stato a partire dal pool di connessioni del database dei libri
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            book: BookRepository::new(pool),
        }
    }
}

/// Stato del servizio album
pub struct AlbumState {
    /// Repository per la gestione degli album
    pub album: AlbumRepository,
}

impl AlbumState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            album: AlbumRepository::new(pool),
        }
    }
}
