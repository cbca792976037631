//! Reducer trait.

use super::snapshot::Snapshot;
use super::transition::Transition;

/// Reducer transforms a snapshot based on a transition.
///
/// The reducer is the only place where state changes are computed.
/// It must be a pure function: (Snapshot, Transition) -> Snapshot
pub trait Reducer {
    /// The snapshot type this reducer operates on.
    type State: Snapshot;

    /// The transition type this reducer handles.
    type Transition: Transition;

    /// Apply a transition and return the next snapshot.
    ///
    /// Must not perform I/O or read anything besides its arguments.
    fn reduce(state: Self::State, transition: Self::Transition) -> Self::State;
}
