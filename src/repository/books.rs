//! Books repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::book::Book};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book; the store assigns the surrogate id.
    pub async fn create(&self, title: &str, author: &str, year: i32) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author, year) VALUES ($1, $2, $3) RETURNING id, title, author, year",
        )
        .bind(title)
        .bind(author)
        .bind(year)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Overwrite title, author and year of an existing book.
    ///
    /// Single conditional statement: returns `None` when the id is absent,
    /// so there is no window between an existence check and the write.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        year: i32,
    ) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "UPDATE books SET title = $1, author = $2, year = $3 WHERE id = $4 RETURNING id, title, author, year",
        )
        .bind(title)
        .bind(author)
        .bind(year)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Delete book by ID; returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
