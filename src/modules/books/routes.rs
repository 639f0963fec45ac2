//! HTTP handlers for the books module.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use shelf_http::{AppError, AppJson};

use super::models::{Book, DeleteResponse};
use super::store::{BookRepository, StoreError};

/// Shared handle to the book collection injected into every handler.
pub type SharedStore = Arc<dyn BookRepository>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AppError::not_found("Book not found"),
        }
    }
}

/// Routes relative to the module mount point.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/{id}", delete(delete_book))
        .with_state(store)
}

/// List every book in insertion order
async fn list_books(State(store): State<SharedStore>) -> Json<Vec<Book>> {
    let books = store.list().await;
    tracing::debug!(count = books.len(), "listing books");
    Json(books)
}

/// Append a book to the collection and echo it back.
/// A top-level `null` body decodes to an all-zero book.
async fn create_book(
    State(store): State<SharedStore>,
    AppJson(book): AppJson<Option<Book>>,
) -> (StatusCode, Json<Book>) {
    let book = store.create(book.unwrap_or_default()).await;
    tracing::info!(book_id = %book.id, title = %book.title, "book created");
    (StatusCode::CREATED, Json(book))
}

/// Remove the first book whose id matches the path segment
async fn delete_book(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = store.delete(&id).await?;
    tracing::info!(book_id = %removed.id, "book deleted");
    Ok(Json(DeleteResponse::deleted()))
}
