//! Repositories module - Coordinatore per i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query usano le funzioni runtime di sqlx (`query`, `query_as`,
//! `QueryBuilder`) al posto delle macro `query!`/`query_as!`: lo schema viene
//! creato dal servizio stesso all'avvio, quindi non esiste un database da
//! interrogare in fase di compilazione. Il mapping riga -> entity è fatto da
//! `#[derive(sqlx::FromRow)]` sulle entity.

pub mod album;
pub mod book;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, List, Read, Update};

pub use album::AlbumRepository;
pub use book::BookRepository;
