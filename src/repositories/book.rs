//! BookRepository - Repository per la gestione dei libri

use super::{Create, Delete, List, Read, Update};
use crate::dtos::{BookFilter, CreateBookDTO};
use crate::entities::Book;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};

pub struct BookRepository {
    connection_pool: SqlitePool,
}

impl BookRepository {
    pub fn new(connection_pool: SqlitePool) -> BookRepository {
        Self { connection_pool }
    }

    /// Crea la tabella `book` se non esiste ancora
    pub async fn create_table(&self) -> Result<(), Error> {
        sqlx::query(Book::TABLE_DDL)
            .execute(&self.connection_pool)
            .await?;
        Ok(())
    }
}

impl Create<Book, CreateBookDTO> for BookRepository {
    async fn create(&self, data: &CreateBookDTO) -> Result<Book, Error> {
        let result =
            sqlx::query("INSERT INTO book (title, author, year_published) VALUES (?, ?, ?)")
                .bind(data.title.as_str())
                .bind(data.author.as_str())
                .bind(data.year_published)
                .execute(&self.connection_pool)
                .await?;

        // Get the last inserted ID
        let new_id = result.last_insert_rowid();

        Ok(Book {
            id: new_id,
            title: data.title.clone(),
            author: data.author.clone(),
            year_published: data.year_published,
        })
    }
}

impl Read<Book, i64> for BookRepository {
    async fn read(&self, id: &i64) -> Result<Option<Book>, Error> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year_published FROM book WHERE id = ?",
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

impl List<Book, BookFilter> for BookRepository {
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, Error> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, title, author, year_published FROM book WHERE 1 = 1");

        if let Some(author) = &filter.author {
            query.push(" AND author = ").push_bind(author.clone());
        }
        if let Some(year) = filter.year_published {
            query.push(" AND year_published = ").push_bind(year);
        }
        query.push(" ORDER BY id");

        query
            .build_query_as::<Book>()
            .fetch_all(&self.connection_pool)
            .await
    }
}

/// L'aggiornamento di un libro sostituisce tutti i campi modificabili:
/// `year_published` assente diventa NULL.
impl Update<Book, CreateBookDTO, i64> for BookRepository {
    async fn update(&self, id: &i64, data: &CreateBookDTO) -> Result<Book, Error> {
        let result = sqlx::query(
            "UPDATE book SET title = ?, author = ?, year_published = ? WHERE id = ?",
        )
        .bind(data.title.as_str())
        .bind(data.author.as_str())
        .bind(data.year_published)
        .bind(*id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(Book {
            id: *id,
            title: data.title.clone(),
            author: data.author.clone(),
            year_published: data.year_published,
        })
    }
}

impl Delete<i64> for BookRepository {
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
