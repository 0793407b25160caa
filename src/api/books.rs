//! Books API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{error::AppResult, models::book::BookPayload};

use super::BasicUser;

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("basic_auth" = [])),
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = BookPayload),
        (status = 400, description = "Missing title or author", body = crate::error::ErrorResponse),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    BasicUser(_user): BasicUser,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<BookPayload>)> {
    payload.validate()?;
    let book = state.services.books.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Books list", body = Vec<BookPayload>),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    BasicUser(_user): BasicUser,
) -> AppResult<Json<Vec<BookPayload>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookPayload),
        (status = 404, description = "No book with this ID", body = crate::error::ErrorResponse),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    BasicUser(_user): BasicUser,
    Path(id): Path<i64>,
) -> AppResult<Json<BookPayload>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Update a book (full overwrite of title, author and year)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = BookPayload),
        (status = 400, description = "Missing title or author", body = crate::error::ErrorResponse),
        (status = 404, description = "No book with this ID", body = crate::error::ErrorResponse),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    BasicUser(_user): BasicUser,
    Path(id): Path<i64>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<BookPayload>> {
    payload.validate()?;
    let book = state.services.books.update(id, &payload).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "No book with this ID", body = crate::error::ErrorResponse),
        (status = 401, description = "Authentication required", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    BasicUser(_user): BasicUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
