//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities):
//! i payload in ingresso vengono validati e convertiti nei DTO di scrittura,
//! le entity lette dal database vengono convertite nei DTO di risposta.

pub mod album;
pub mod book;
pub mod query;

pub use album::{AlbumDTO, AlbumPayload, CreateAlbumDTO, UpdateAlbumDTO};
pub use book::{BookDTO, BookPayload, CreateBookDTO};
pub use query::BookFilter;

use crate::core::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Converte il body JSON in un payload, accettando solo oggetti.
///
/// Il `Deserialize` derivato da serde accetterebbe anche un array posizionale
/// (`["Dune", "Herbert"]`), che non è un record valido.
pub fn payload_from_json<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::bad_request("Invalid JSON body")
            .with_details("Expected a JSON object"));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::bad_request("Invalid JSON body").with_details(e.to_string()))
}
