//! Query DTOs - Data Transfer Objects per query di ricerca

use std::num::ParseIntError;

/// Filtri di `GET /api/books?author=...&year=...`, combinati in AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub year_published: Option<i64>,
}

impl BookFilter {
    /// Costruisce i filtri dalle coppie della query string.
    ///
    /// Per una chiave ripetuta conta solo la prima occorrenza; le chiavi
    /// sconosciute vengono ignorate. Un `year` non numerico è un errore.
    pub fn from_query_pairs(pairs: Vec<(String, String)>) -> Result<Self, ParseIntError> {
        let mut filter = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "author" if filter.author.is_none() => filter.author = Some(value),
                "year" if filter.year_published.is_none() => {
                    filter.year_published = Some(value.trim().parse()?)
                }
                _ => {}
            }
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_has_no_filters() {
        assert_eq!(
            BookFilter::from_query_pairs(Vec::new()).unwrap(),
            BookFilter::default()
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let filter = BookFilter::from_query_pairs(pairs(&[
            ("author", "Herbert"),
            ("year", "1965"),
            ("author", "Austen"),
            ("year", "not a year"),
            ("page", "2"),
        ]))
        .unwrap();

        assert_eq!(filter.author.as_deref(), Some("Herbert"));
        assert_eq!(filter.year_published, Some(1965));
    }

    #[test]
    fn non_numeric_year_is_an_error() {
        assert!(BookFilter::from_query_pairs(pairs(&[("year", "sixties")])).is_err());
        assert!(BookFilter::from_query_pairs(pairs(&[("year", "")])).is_err());
    }
}
