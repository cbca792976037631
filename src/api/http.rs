use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::query::ListingQuery;
use crate::api::BookApi;
use crate::books::{Book, BookId};
use crate::config::ApiConfig;

const BOOKS: &str = "books";
const FAVORITES: &str = "favorites";

/// [`BookApi`] over HTTP with a JSON body on every response.
pub struct HttpBookApi {
    client: Client,
    base_url: Url,
}

impl HttpBookApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid_base(&self.base_url))?
            .pop_if_empty()
            .push(collection);
        Ok(url)
    }

    fn resource_url(&self, collection: &str, id: &BookId) -> Result<Url, ApiError> {
        let mut url = self.collection_url(collection)?;
        url.path_segments_mut()
            .map_err(|_| invalid_base(&self.base_url))?
            .push(&id.to_string());
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        error_for_status(response).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            message: format!("Invalid response body: {}", e),
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self, query: &ListingQuery) -> Result<Vec<Book>, ApiError> {
        let mut url = self.collection_url(BOOKS)?;
        url.query_pairs_mut().extend_pairs(query.to_params());
        tracing::debug!(%url, "GET books");
        self.fetch_json(self.client.get(url)).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, ApiError> {
        let url = self.resource_url(BOOKS, id)?;
        tracing::debug!(%url, "GET book");
        self.fetch_json(self.client.get(url)).await
    }

    async fn add_favorite(&self, book: &Book) -> Result<(), ApiError> {
        let url = self.collection_url(FAVORITES)?;
        tracing::debug!(%url, book_id = %book.id, "POST favorite");
        self.send(self.client.post(url).json(book)).await?;
        Ok(())
    }

    async fn list_favorites(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.collection_url(FAVORITES)?;
        tracing::debug!(%url, "GET favorites");
        self.fetch_json(self.client.get(url)).await
    }

    async fn remove_favorite(&self, id: &BookId) -> Result<(), ApiError> {
        let url = self.resource_url(FAVORITES, id)?;
        tracing::debug!(%url, "DELETE favorite");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
        message: format!("Invalid API base URL '{}': {}", raw, e),
    })?;
    if url.cannot_be_a_base() {
        return Err(invalid_base(&url));
    }
    Ok(url)
}

fn invalid_base(url: &Url) -> ApiError {
    ApiError::InvalidUrl {
        message: format!("API base URL '{}' cannot carry a path", url),
    }
}

/// Turn a non-2xx response into an [`ApiError`].
async fn error_for_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, status = %status, "Failed to read error response body");
            String::new()
        }
    };
    let message = error_message(&body)
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound { message })
    } else {
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// Message carried by a JSON error body (`message` or `error`), if any.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
