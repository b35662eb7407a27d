//! Carrier type pairing a new state with the effects it requests.

/// The outcome of a single transition: exactly one new state plus an
/// ordered sequence of zero or more effects.
///
/// Sequence order is the intended execution/display order, not a
/// concurrency guarantee. A `TransitionResult` is created fresh by every
/// transition call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult<S, E> {
    /// The state the machine is in after the transition.
    pub state: S,
    /// Effects requested by the transition, in emission order.
    pub effects: Vec<E>,
}

impl<S, E> TransitionResult<S, E> {
    /// Transition to `state` with no effects.
    ///
    /// Also used for the no-op case: returning the input state unchanged
    /// with an empty effect list means "this event is irrelevant here".
    pub fn next(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    /// Transition to `state` with a single effect.
    pub fn with_effect(state: S, effect: E) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }

    /// Transition to `state` with an ordered list of effects.
    pub fn with_effects(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

impl<S: PartialEq, E> TransitionResult<S, E> {
    /// True if this result leaves `previous` unchanged and requests nothing.
    pub fn is_noop(&self, previous: &S) -> bool {
        self.effects.is_empty() && self.state == *previous
    }
}
