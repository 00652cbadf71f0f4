//! AlbumRepository - Repository per la gestione degli album

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateAlbumDTO, UpdateAlbumDTO};
use crate::entities::Album;
use sqlx::{Error, SqlitePool};

pub struct AlbumRepository {
    connection_pool: SqlitePool,
}

impl AlbumRepository {
    pub fn new(connection_pool: SqlitePool) -> AlbumRepository {
        Self { connection_pool }
    }

    /// Crea la tabella `album` se non esiste ancora
    pub async fn create_table(&self) -> Result<(), Error> {
        sqlx::query(Album::TABLE_DDL)
            .execute(&self.connection_pool)
            .await?;
        Ok(())
    }
}

impl Create<Album, CreateAlbumDTO> for AlbumRepository {
    async fn create(&self, data: &CreateAlbumDTO) -> Result<Album, Error> {
        let result = sqlx::query("INSERT INTO album (title, artist) VALUES (?, ?)")
            .bind(data.title.as_str())
            .bind(data.artist.as_str())
            .execute(&self.connection_pool)
            .await?;

        Ok(Album {
            id: result.last_insert_rowid(),
            title: data.title.clone(),
            artist: data.artist.clone(),
        })
    }
}

impl Read<Album, i64> for AlbumRepository {
    async fn read(&self, id: &i64) -> Result<Option<Album>, Error> {
        sqlx::query_as::<_, Album>("SELECT id, title, artist FROM album WHERE id = ?")
            .bind(*id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<Album, UpdateAlbumDTO, i64> for AlbumRepository {
    async fn update(&self, id: &i64, data: &UpdateAlbumDTO) -> Result<Album, Error> {
        // i campi None lasciano invariato il valore salvato
        let result = sqlx::query(
            "UPDATE album SET title = COALESCE(?, title), artist = COALESCE(?, artist) WHERE id = ?",
        )
        .bind(data.title.as_deref())
        .bind(data.artist.as_deref())
        .bind(*id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for AlbumRepository {
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM album WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
