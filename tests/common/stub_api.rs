//! Scripted in-memory `BookApi` for coordinator tests.
//!
//! Every call pops the next scripted reply for its method. A reply is
//! either ready immediately or held behind a [`Gate`] the test resolves
//! later, which lets tests choose the order in which requests settle.

#![allow(dead_code)]

use async_trait::async_trait;
use bookshelf::{ApiError, Book, BookApi, BookId, ListingQuery};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::oneshot;

type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

/// A request the stub received.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListBooks(ListingQuery),
    GetBook(BookId),
    AddFavorite(Book),
    ListFavorites,
    RemoveFavorite(BookId),
}

/// Pending reply; the request settles when the gate is resolved or rejected.
pub struct Gate<T>(oneshot::Sender<Result<T, ApiError>>);

impl<T> Gate<T> {
    pub fn resolve(self, value: T) {
        let _ = self.0.send(Ok(value));
    }

    pub fn reject(self, err: ApiError) {
        let _ = self.0.send(Err(err));
    }
}

#[derive(Default)]
pub struct StubApi {
    calls: Mutex<Vec<ApiCall>>,
    list_books: Mutex<VecDeque<Reply<Vec<Book>>>>,
    get_book: Mutex<VecDeque<Reply<Book>>>,
    add_favorite: Mutex<VecDeque<Reply<()>>>,
    list_favorites: Mutex<VecDeque<Reply<Vec<Book>>>>,
    remove_favorite: Mutex<VecDeque<Reply<()>>>,
}

fn ready<T>(queue: &Mutex<VecDeque<Reply<T>>>, result: Result<T, ApiError>) {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(result);
    queue.lock().push_back(rx);
}

fn gate<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Gate<T> {
    let (tx, rx) = oneshot::channel();
    queue.lock().push_back(rx);
    Gate(tx)
}

async fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>, method: &str) -> Result<T, ApiError> {
    let reply = queue.lock().pop_front();
    match reply {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(ApiError::transport("gate dropped without a reply"))),
        None => Err(ApiError::transport(format!("no scripted reply for {}", method))),
    }
}

impl StubApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn on_list_books(&self, result: Result<Vec<Book>, ApiError>) {
        ready(&self.list_books, result);
    }

    pub fn gate_list_books(&self) -> Gate<Vec<Book>> {
        gate(&self.list_books)
    }

    pub fn on_get_book(&self, result: Result<Book, ApiError>) {
        ready(&self.get_book, result);
    }

    pub fn gate_get_book(&self) -> Gate<Book> {
        gate(&self.get_book)
    }

    pub fn on_add_favorite(&self, result: Result<(), ApiError>) {
        ready(&self.add_favorite, result);
    }

    pub fn on_list_favorites(&self, result: Result<Vec<Book>, ApiError>) {
        ready(&self.list_favorites, result);
    }

    pub fn on_remove_favorite(&self, result: Result<(), ApiError>) {
        ready(&self.remove_favorite, result);
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl BookApi for StubApi {
    async fn list_books(&self, query: &ListingQuery) -> Result<Vec<Book>, ApiError> {
        self.record(ApiCall::ListBooks(query.clone()));
        next(&self.list_books, "list_books").await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, ApiError> {
        self.record(ApiCall::GetBook(id.clone()));
        next(&self.get_book, "get_book").await
    }

    async fn add_favorite(&self, book: &Book) -> Result<(), ApiError> {
        self.record(ApiCall::AddFavorite(book.clone()));
        next(&self.add_favorite, "add_favorite").await
    }

    async fn list_favorites(&self) -> Result<Vec<Book>, ApiError> {
        self.record(ApiCall::ListFavorites);
        next(&self.list_favorites, "list_favorites").await
    }

    async fn remove_favorite(&self, id: &BookId) -> Result<(), ApiError> {
        self.record(ApiCall::RemoveFavorite(id.clone()));
        next(&self.remove_favorite, "remove_favorite").await
    }
}
