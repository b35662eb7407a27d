//! Base trait for machine state.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to act on the current phase)
/// - Comparable (PartialEq for detecting changes)
pub trait MachineState: Clone + PartialEq + Send + 'static {}
