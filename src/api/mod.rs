//! Remote book API: the trait coordinators call and its HTTP implementation.

pub mod error;
pub mod http;
pub mod query;

use async_trait::async_trait;

use crate::books::{Book, BookId};

pub use error::ApiError;
pub use http::HttpBookApi;
pub use query::ListingQuery;

/// Requests the coordinators issue against the book backend.
///
/// Implementations normalize every failure into an [`ApiError`] whose
/// `Display` is the human-readable message.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET books` with paging and an optional text filter.
    async fn list_books(&self, query: &ListingQuery) -> Result<Vec<Book>, ApiError>;

    /// `GET books/{id}`. A missing book is [`ApiError::NotFound`].
    async fn get_book(&self, id: &BookId) -> Result<Book, ApiError>;

    /// `POST favorites` with the book as body.
    ///
    /// Any 2xx reply is an acknowledgement; its body is not read.
    async fn add_favorite(&self, book: &Book) -> Result<(), ApiError>;

    /// `GET favorites`.
    async fn list_favorites(&self) -> Result<Vec<Book>, ApiError>;

    /// `DELETE favorites/{id}`.
    async fn remove_favorite(&self, id: &BookId) -> Result<(), ApiError>;
}
