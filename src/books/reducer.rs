use crate::mvi::Reducer;

use super::state::ClientState;
use super::transition::BookTransition;

pub struct BooksReducer;

impl Reducer for BooksReducer {
    type State = ClientState;
    type Transition = BookTransition;

    fn reduce(state: Self::State, transition: Self::Transition) -> Self::State {
        match transition {
            // A new request hides the previous failure while it is in flight.
            BookTransition::StartLoading => ClientState {
                is_loading: true,
                error: None,
                ..state
            },
            BookTransition::CommitFailure(error) => ClientState {
                is_loading: false,
                error: Some(error),
                ..state
            },
            BookTransition::CommitListing(books) => ClientState {
                is_loading: false,
                error: None,
                books,
                ..state
            },
            BookTransition::CommitDetail(book) => ClientState {
                is_loading: false,
                error: None,
                selected_book: Some(book),
                ..state
            },
            BookTransition::CommitWrite => ClientState {
                is_loading: false,
                error: None,
                ..state
            },
        }
    }
}

/// Apply one transition to a snapshot.
pub fn apply(state: ClientState, transition: BookTransition) -> ClientState {
    BooksReducer::reduce(state, transition)
}
