//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP di uno dei due servizi.

pub mod album;
pub mod book;

// Re-exports per facilitare l'import
pub use album::{create_album, delete_album, read_album, root, update_album};
pub use book::{create_book, delete_book, list_books, read_book, update_book, welcome};
