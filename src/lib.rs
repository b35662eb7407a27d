//! Deterministic state machines with deferred side effects.
//!
//! The crate separates state computation from side-effect execution:
//! a pure transition function maps (state, event) to a new state plus a
//! list of effect descriptions, and a controller executes those effects
//! and feeds their outcomes back in as new events.
//!
//! - [`machine`] — the generic traits and the `TransitionResult` carrier
//! - [`profile`] — an example domain: a profile-editor screen
//! - [`controller`] — the effect coordinator closing the feedback loop
//! - [`gateway`] — the async persistence boundary the coordinator calls

pub mod controller;
pub mod gateway;
pub mod machine;
pub mod profile;
