//! Base trait for events driving a machine.

/// Marker trait for event objects.
///
/// Events represent:
/// - User actions (button clicks, field edits)
/// - System outcomes (async completions, failures)
///
/// Events are consumed exactly once by a machine's transition function.
pub trait Event: Send + 'static {}
