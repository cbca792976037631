//! Base trait for state snapshots.

/// Marker trait for snapshot types.
///
/// Snapshots should be:
/// - Immutable (Clone to hand copies to subscribers)
/// - Self-contained (everything a view needs to render)
/// - Comparable (PartialEq so subscribers can skip identical frames)
pub trait Snapshot: Clone + PartialEq + Default + Send + Sync + 'static {}
