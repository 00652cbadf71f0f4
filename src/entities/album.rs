//! Album entity - riga della tabella `album`

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl Album {
    pub const TABLE_DDL: &'static str = "CREATE TABLE IF NOT EXISTS album (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(80) NOT NULL,
        artist VARCHAR(80) NOT NULL
    )";
}
