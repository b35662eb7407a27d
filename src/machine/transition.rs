//! Machine trait: the pure transition function.

use super::effect::Effect;
use super::event::Event;
use super::result::TransitionResult;
use super::state::MachineState;

/// A deterministic state machine with deferred side effects.
///
/// The transition function is the only place where state changes happen.
/// It must be pure: no I/O, no mutation of shared state, no randomness,
/// no timing dependency. Identical (state, event) pairs always yield
/// identical results. Side work is requested through effect values and
/// executed elsewhere, by a coordinator.
///
/// Machines take `&self` so configuration (ids, policies) can be injected
/// through the constructor instead of read from ambient globals.
pub trait Machine {
    /// The state type this machine operates on.
    type State: MachineState;

    /// The event type this machine handles.
    type Event: Event;

    /// The effect type this machine emits.
    type Effect: Effect;

    /// Process an event and return the new state plus requested effects.
    ///
    /// Must be total: every (state, event) pair returns a value. Events
    /// irrelevant to the current state map to the identity no-op rather
    /// than an error.
    fn transition(
        &self,
        state: Self::State,
        event: Self::Event,
    ) -> TransitionResult<Self::State, Self::Effect>;
}
