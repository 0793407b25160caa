//! Books service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book from the payload fields and return its wire view.
    ///
    /// Repeated identical submissions create distinct rows.
    pub async fn create(&self, payload: &BookPayload) -> AppResult<BookPayload> {
        let (title, author) = required_fields(payload)?;
        let book = self
            .repository
            .books
            .create(title, author, payload.year)
            .await?;
        Ok(BookPayload::from(book))
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookPayload> {
        let book = self.require_book(id).await?;
        Ok(BookPayload::from(book))
    }

    /// List all books, preserving store order
    pub async fn list(&self) -> AppResult<Vec<BookPayload>> {
        let books = self.repository.books.list().await?;
        Ok(books.into_iter().map(BookPayload::from).collect())
    }

    /// Overwrite title, author and year of an existing book.
    ///
    /// Always a full overwrite; partial updates are not supported.
    pub async fn update(&self, id: i64, payload: &BookPayload) -> AppResult<BookPayload> {
        let (title, author) = required_fields(payload)?;
        let book = self
            .repository
            .books
            .update(id, title, author, payload.year)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(BookPayload::from(book))
    }

    /// Delete book by ID
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        if !self.repository.books.delete_by_id(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn require_book(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book with id {} not found.", id))
}

/// Payloads are validated at the transport boundary; this is the service's
/// own guard so it never persists a half-formed record.
fn required_fields(payload: &BookPayload) -> AppResult<(&str, &str)> {
    let title = payload
        .title
        .as_deref()
        .ok_or_else(|| AppError::Validation("Book title is required".to_string()))?;
    let author = payload
        .author
        .as_deref()
        .ok_or_else(|| AppError::Validation("Book author is required".to_string()))?;
    Ok((title, author))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = not_found(99);
        assert_eq!(err.to_string(), "Not found: Book with id 99 not found.");
    }

    #[test]
    fn required_fields_rejects_missing_title() {
        let payload = BookPayload {
            title: None,
            author: Some("Author Test".to_string()),
            year: 2015,
        };
        assert!(matches!(
            required_fields(&payload),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn required_fields_passes_through_complete_payloads() {
        let payload = BookPayload {
            title: Some("Book Title".to_string()),
            author: Some("Author Test".to_string()),
            year: 2015,
        };
        let (title, author) = required_fields(&payload).unwrap();
        assert_eq!(title, "Book Title");
        assert_eq!(author, "Author Test");
    }
}
