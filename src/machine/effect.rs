//! Base trait for effects emitted by a machine.

/// Marker trait for effect objects.
///
/// Effects are pure data: immutable value descriptions of work to perform,
/// never executable closures. They are emitted by a transition, consumed
/// exactly once by the coordinator, then discarded.
pub trait Effect: Send + 'static {}
