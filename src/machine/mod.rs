//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits and carrier type for implementing
//! deterministic state machines with deferred side effects.
//!
//! # Architecture
//!
//! ```text
//! Event ──→ Machine ──→ TransitionResult{State, Effects}
//!    ↑                        │               │
//!    │                     published       executed by
//!    │                     to observers    coordinator
//!    └────── outcome events ─────────────────┘
//! ```
//!
//! - **State**: Immutable representation of what the system currently is
//! - **Event**: User actions or system outcomes, consumed exactly once
//! - **Effect**: Immutable description of side work to be performed
//! - **Machine**: Pure function (State, Event) -> (State, Effects)

mod effect;
mod event;
mod result;
mod state;
mod transition;

pub use effect::Effect;
pub use event::Event;
pub use result::TransitionResult;
pub use state::MachineState;
pub use transition::Machine;
