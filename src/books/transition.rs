//! Transitions accepted by the book state reducer.

use std::fmt;

use crate::mvi::Transition;

use super::state::{Book, ErrorInfo};

/// Every state change the coordinators can request.
#[derive(Debug, Clone, PartialEq)]
pub enum BookTransition {
    /// A request is about to be issued.
    StartLoading,

    /// The request failed.
    CommitFailure(ErrorInfo),

    /// A listing or reading-list request succeeded. Replaces `books`.
    CommitListing(Vec<Book>),

    /// A single-book request succeeded. Replaces `selected_book`.
    CommitDetail(Book),

    /// A write (add/remove) was acknowledged. Carries no payload.
    CommitWrite,
}

impl Transition for BookTransition {}

/// Payload-free tag of a [`BookTransition`], handed to store observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    StartLoading,
    CommitFailure,
    CommitListing,
    CommitDetail,
    CommitWrite,
}

impl TransitionKind {
    /// Whether this transition ends a coordinator's loading phase.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TransitionKind::StartLoading)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransitionKind::StartLoading => "start_loading",
            TransitionKind::CommitFailure => "commit_failure",
            TransitionKind::CommitListing => "commit_listing",
            TransitionKind::CommitDetail => "commit_detail",
            TransitionKind::CommitWrite => "commit_write",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BookTransition {
    pub fn kind(&self) -> TransitionKind {
        match self {
            BookTransition::StartLoading => TransitionKind::StartLoading,
            BookTransition::CommitFailure(_) => TransitionKind::CommitFailure,
            BookTransition::CommitListing(_) => TransitionKind::CommitListing,
            BookTransition::CommitDetail(_) => TransitionKind::CommitDetail,
            BookTransition::CommitWrite => TransitionKind::CommitWrite,
        }
    }
}
