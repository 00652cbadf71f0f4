//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database del proprio servizio.

pub mod album;
pub mod book;

// Re-exports per facilitare l'import
pub use album::Album;
pub use book::Book;
