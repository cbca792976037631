//! Client-side state synchronization for a bookstore browser.
//!
//! [`actions::BookActions`] coordinates requests against an
//! [`api::BookApi`] and drives a [`store::Store`] through typed
//! [`books::BookTransition`]s, so a view subscribed to the store never sees
//! an inconsistent loading/error/data combination.

pub mod actions;
pub mod api;
pub mod books;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod notify;
pub mod store;
pub mod view;

pub use actions::BookActions;
pub use api::{ApiError, BookApi, HttpBookApi, ListingQuery};
pub use books::{Book, BookId, BookTransition, ClientState, ErrorInfo, FieldValue};
pub use notify::NotificationSink;
pub use store::{create_store, Store, StoreObserver};
