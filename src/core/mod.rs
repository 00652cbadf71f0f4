//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" condivisi dai due servizi:
//! - Configurazione
//! - Pool del database
//! - Gestione errori
//! - Stato applicazione
//! - Avvio del server e logging

pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod state;

// Re-exports per facilitare l'import
pub use config::{Config, Service};
pub use error::AppError;
pub use state::{AlbumState, BookState};
