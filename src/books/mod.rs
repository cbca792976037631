//! Client-side book state: the snapshot, its transitions, and the reducer.

mod reducer;
mod state;
mod transition;

pub use reducer::{apply, BooksReducer};
pub use state::{Book, BookId, ClientState, ErrorInfo, ErrorKind, FieldValue};
pub use transition::{BookTransition, TransitionKind};
