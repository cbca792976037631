//! Action coordinators.
//!
//! Each coordinator runs one request/response cycle: it applies
//! `StartLoading`, awaits the API call, then applies exactly one terminal
//! commit chosen by whether the call returned a value or an error. Errors
//! are stored in the snapshot and forwarded to the notification sink; they
//! are never retried.
//!
//! Coordinators may run concurrently. Their terminal commits land in
//! settlement order, so the last request to settle decides `is_loading`
//! and `error` even if another coordinator is still in flight.

use std::sync::Arc;

use tracing::Instrument;

use crate::api::{ApiError, BookApi, ListingQuery};
use crate::books::{Book, BookId, BookTransition, ClientState, ErrorInfo};
use crate::notify::NotificationSink;
use crate::store::Store;

pub const ADDED_MESSAGE: &str = "The book has been added to the reading list!";
pub const REMOVED_MESSAGE: &str = "The book has been removed";

#[derive(Clone)]
pub struct BookActions {
    store: Store,
    api: Arc<dyn BookApi>,
    notifier: Arc<dyn NotificationSink>,
}

impl BookActions {
    pub fn new(store: Store, api: Arc<dyn BookApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            store,
            api,
            notifier,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Load one page of the catalogue into `books`.
    pub async fn fetch_listing(&self, query: ListingQuery) -> ClientState {
        let span = tracing::info_span!(
            "fetch_listing",
            page = query.page,
            limit = query.limit,
            q = query.q.as_deref().unwrap_or("")
        );
        async {
            self.store.apply(BookTransition::StartLoading);
            match self.api.list_books(&query).await {
                Ok(books) => {
                    tracing::debug!(count = books.len(), "Listing loaded");
                    self.store.apply(BookTransition::CommitListing(books))
                }
                Err(err) => self.fail(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Load one book into `selected_book`.
    pub async fn fetch_detail(&self, id: BookId) -> ClientState {
        async {
            self.store.apply(BookTransition::StartLoading);
            match self.api.get_book(&id).await {
                Ok(book) => self.store.apply(BookTransition::CommitDetail(book)),
                Err(err) => self.fail(err),
            }
        }
        .instrument(tracing::info_span!("fetch_detail", book_id = %id))
        .await
    }

    pub async fn add_to_reading_list(&self, book: Book) -> ClientState {
        let span = tracing::info_span!("add_to_reading_list", book_id = %book.id);
        async {
            self.store.apply(BookTransition::StartLoading);
            match self.api.add_favorite(&book).await {
                Ok(()) => {
                    let state = self.store.apply(BookTransition::CommitWrite);
                    self.notifier.notify_success(ADDED_MESSAGE);
                    state
                }
                Err(err) => self.fail(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Load the reading list into `books`.
    pub async fn fetch_reading_list(&self) -> ClientState {
        async {
            self.store.apply(BookTransition::StartLoading);
            match self.api.list_favorites().await {
                Ok(books) => {
                    tracing::debug!(count = books.len(), "Reading list loaded");
                    self.store.apply(BookTransition::CommitListing(books))
                }
                Err(err) => self.fail(err),
            }
        }
        .instrument(tracing::info_span!("fetch_reading_list"))
        .await
    }

    pub async fn remove_from_reading_list(&self, id: BookId) -> ClientState {
        async {
            self.store.apply(BookTransition::StartLoading);
            match self.api.remove_favorite(&id).await {
                Ok(()) => {
                    let state = self.store.apply(BookTransition::CommitWrite);
                    self.notifier.notify_success(REMOVED_MESSAGE);
                    state
                }
                Err(err) => self.fail(err),
            }
        }
        .instrument(tracing::info_span!("remove_from_reading_list", book_id = %id))
        .await
    }

    fn fail(&self, err: ApiError) -> ClientState {
        tracing::warn!(error = %err, status = ?err.status(), "Request failed");
        let state = self
            .store
            .apply(BookTransition::CommitFailure(ErrorInfo::from(&err)));
        self.notifier.notify_error(err.message());
        state
    }
}
