//! Model-View-Intent primitives for the client-side state container.
//!
//! # Architecture
//!
//! ```text
//! Coordinator ──→ Transition ──→ Reducer ──→ Snapshot ──→ View
//!      ↑                                                   │
//!      └───────────────────────────────────────────────────┘
//! ```
//!
//! - **Snapshot**: immutable value holding the full client state at one instant
//! - **Transition**: a typed command carrying the payload of one state change
//! - **Reducer**: pure function `(Snapshot, Transition) -> Snapshot`

mod reducer;
mod snapshot;
mod transition;

pub use reducer::Reducer;
pub use snapshot::Snapshot;
pub use transition::Transition;
