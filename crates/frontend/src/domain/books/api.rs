use contracts::domain::book::{Book, BookFilters, BookInput};
use contracts::shared::pagination::PaginatedResponse;

use crate::system::http::client;
use crate::system::http::error::ApiError;

/// Fetch one catalog page. Every filter change issues a fresh request;
/// ordering is whatever the server returns.
pub async fn list(filters: &BookFilters) -> Result<PaginatedResponse<Book>, ApiError> {
    client::get(&format!("/books/?{}", filters.to_query_string())).await
}

pub async fn get(id: i64) -> Result<Book, ApiError> {
    client::get(&format!("/books/{}/", id)).await
}

pub async fn create(input: &BookInput) -> Result<Book, ApiError> {
    client::post("/books/", input).await
}

pub async fn update(id: i64, input: &BookInput) -> Result<Book, ApiError> {
    client::patch(&format!("/books/{}/", id), input).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    client::delete(&format!("/books/{}/", id)).await
}

/// Category enumeration; independent of the active filters.
pub async fn categories() -> Result<Vec<String>, ApiError> {
    client::get("/books/categories/").await
}
