//! Book model and transfer types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record as persisted.
///
/// `id` is assigned by the store on insert and never leaves the server;
/// clients refer to a book only through the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Wire-facing book payload, used for both request bodies and responses.
///
/// `title` and `author` are `Option` so that a JSON `null` reaches field
/// validation (and its domain message) instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(
        required(message = "Book title is required"),
        length(min = 1, message = "Book title is required")
    )]
    #[schema(example = "The Left Hand of Darkness")]
    pub title: Option<String>,
    #[validate(
        required(message = "Book author is required"),
        length(min = 1, message = "Book author is required")
    )]
    #[schema(example = "Ursula K. Le Guin")]
    pub author: Option<String>,
    #[serde(default)]
    #[schema(example = 1969)]
    pub year: i32,
}

impl From<Book> for BookPayload {
    fn from(book: Book) -> Self {
        Self {
            title: Some(book.title),
            author: Some(book.author),
            year: book.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>, author: Option<&str>) -> BookPayload {
        BookPayload {
            title: title.map(String::from),
            author: author.map(String::from),
            year: 2015,
        }
    }

    #[test]
    fn complete_payload_is_valid() {
        assert!(payload(Some("Book Title"), Some("Author Test")).validate().is_ok());
    }

    #[test]
    fn missing_title_is_rejected() {
        let errors = payload(None, Some("Author Test")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn missing_author_is_rejected() {
        let errors = payload(Some("Book Title"), None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("author"));
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(payload(Some(""), Some("Author Test")).validate().is_err());
        assert!(payload(Some("Book Title"), Some("")).validate().is_err());
    }

    #[test]
    fn null_fields_deserialize_then_fail_validation() {
        let parsed: BookPayload =
            serde_json::from_str(r#"{"title":null,"author":null,"year":2015}"#)
                .expect("null fields must deserialize");
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn absent_year_defaults_to_zero() {
        let parsed: BookPayload =
            serde_json::from_str(r#"{"title":"Book Title","author":"Author Test"}"#)
                .expect("year is optional on the wire");
        assert_eq!(parsed.year, 0);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn payload_view_drops_the_id() {
        let book = Book {
            id: 42,
            title: "Book Title".to_string(),
            author: "Author Test".to_string(),
            year: 2015,
        };
        let value = serde_json::to_value(BookPayload::from(book)).unwrap();
        assert_eq!(value.get("id"), None);
        assert_eq!(value["title"], "Book Title");
        assert_eq!(value["author"], "Author Test");
        assert_eq!(value["year"], 2015);
    }
}
