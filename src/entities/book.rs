//! Book entity - riga della tabella `book`

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year_published: Option<i64>,
}

impl Book {
    /// DDL della tabella, eseguito all'avvio se la tabella non esiste.
    /// AUTOINCREMENT impedisce il riuso degli id dei libri cancellati.
    pub const TABLE_DDL: &'static str = "CREATE TABLE IF NOT EXISTS book (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(80) NOT NULL,
        author VARCHAR(80) NOT NULL,
        year_published INTEGER
    )";
}
