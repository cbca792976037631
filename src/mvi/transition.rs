//! Base trait for transitions.

/// Marker trait for transition commands.
///
/// A transition is produced by a coordinator when a request starts or
/// settles, and consumed exactly once by a reducer.
pub trait Transition: Send + 'static {}
