//! Album DTOs - Data Transfer Objects per album

use crate::entities::Album;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AlbumDTO {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl From<Album> for AlbumDTO {
    fn from(value: Album) -> Self {
        Self {
            id: value.id,
            title: value.title,
            artist: value.artist,
        }
    }
}

/// Body JSON ricevuto da POST e PUT. La presenza dei campi viene controllata
/// a mano dalla conversione verso il DTO di destinazione, qui si validano solo
/// le lunghezze.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct AlbumPayload {
    #[validate(length(max = 80, message = "title must be at most 80 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 80, message = "artist must be at most 80 characters"))]
    pub artist: Option<String>,
}

/// DTO per creare un nuovo album (senza id)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateAlbumDTO {
    pub title: String,
    pub artist: String,
}

impl TryFrom<AlbumPayload> for CreateAlbumDTO {
    type Error = ValidationErrors;

    fn try_from(payload: AlbumPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        match (payload.title, payload.artist) {
            (Some(title), Some(artist)) => Ok(Self { title, artist }),
            (title, artist) => {
                let mut errors = ValidationErrors::new();
                if title.is_none() {
                    errors.add("title", ValidationError::new("required"));
                }
                if artist.is_none() {
                    errors.add("artist", ValidationError::new("required"));
                }
                Err(errors)
            }
        }
    }
}

/// DTO per aggiornare un album: solo i campi `Some(_)` vengono modificati
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpdateAlbumDTO {
    pub title: Option<String>,
    pub artist: Option<String>,
}

impl TryFrom<AlbumPayload> for UpdateAlbumDTO {
    type Error = ValidationErrors;

    fn try_from(payload: AlbumPayload) -> Result<Self, Self::Error> {
        payload.validate()?;
        Ok(Self {
            title: payload.title,
            artist: payload.artist,
        })
    }
}
