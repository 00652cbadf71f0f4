//! Book DTOs - Data Transfer Objects per libri

use crate::entities::Book;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Rappresentazione JSON di un libro restituita al client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookDTO {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year_published: Option<i64>,
}

impl From<Book> for BookDTO {
    fn from(value: Book) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            year_published: value.year_published,
        }
    }
}

/// Body JSON di creazione e aggiornamento, così come arriva dal client.
///
/// I campi obbligatori sono `Option` per poter segnalare tutti i campi
/// mancanti insieme invece di fermarsi al primo. Un eventuale `id` nel body
/// viene ignorato.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct BookPayload {
    #[validate(
        required(message = "title is required"),
        length(max = 80, message = "title must be at most 80 characters")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "author is required"),
        length(max = 80, message = "author must be at most 80 characters")
    )]
    pub author: Option<String>,

    pub year_published: Option<i64>,
}

/// DTO per scrivere un libro (senza id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateBookDTO {
    pub title: String,
    pub author: String,
    pub year_published: Option<i64>,
}

impl TryFrom<BookPayload> for CreateBookDTO {
    type Error = ValidationErrors;

    fn try_from(payload: BookPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        match (payload.title, payload.author) {
            (Some(title), Some(author)) => Ok(Self {
                title,
                author,
                year_published: payload.year_published,
            }),
            // già escluso dal validatore `required`
            (title, author) => {
                let mut errors = ValidationErrors::new();
                if title.is_none() {
                    errors.add("title", ValidationError::new("required"));
                }
                if author.is_none() {
                    errors.add("author", ValidationError::new("required"));
                }
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> BookPayload {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn complete_payload_converts() {
        let dto = CreateBookDTO::try_from(payload(json!({
            "title": "Dune",
            "author": "Herbert",
            "year_published": 1965
        })))
        .unwrap();

        assert_eq!(dto.title, "Dune");
        assert_eq!(dto.author, "Herbert");
        assert_eq!(dto.year_published, Some(1965));
    }

    #[test]
    fn year_published_is_optional() {
        let dto = CreateBookDTO::try_from(payload(json!({
            "title": "Dune",
            "author": "Herbert"
        })))
        .unwrap();

        assert_eq!(dto.year_published, None);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = CreateBookDTO::try_from(payload(json!({ "year_published": 1965 })))
            .unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
    }

    #[test]
    fn null_counts_as_missing() {
        let result = CreateBookDTO::try_from(payload(json!({
            "title": null,
            "author": "Herbert"
        })));

        assert!(result.unwrap_err().field_errors().contains_key("title"));
    }

    #[test]
    fn over_length_strings_are_rejected() {
        let result = CreateBookDTO::try_from(payload(json!({
            "title": "x".repeat(81),
            "author": "a".repeat(80)
        })));

        let errors = result.unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(!errors.field_errors().contains_key("author"));
    }

    #[test]
    fn mistyped_fields_fail_deserialization() {
        let result = serde_json::from_value::<BookPayload>(json!({
            "title": "Dune",
            "author": "Herbert",
            "year_published": "nineteen sixty-five"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let dto = CreateBookDTO::try_from(payload(json!({
            "id": 42,
            "title": "Dune",
            "author": "Herbert"
        })))
        .unwrap();

        assert_eq!(serde_json::to_value(&dto).unwrap().get("id"), None);
    }

    #[test]
    fn serialized_book_round_trips_declared_fields() {
        let input = json!({
            "id": 7,
            "title": "Dune",
            "author": "Herbert",
            "year_published": null
        });

        let book: Book = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(BookDTO::from(book)).unwrap();

        assert_eq!(output, input);
    }
}
