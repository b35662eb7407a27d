//! Effect coordination for the profile machine.
//!
//! Bridges the pure transition function to the asynchronous world:
//! a single driver task serializes events against the current state,
//! publishes each new state through a watch cell, executes re-entrant
//! effects against the gateway, and multiplexes one-shot presentation
//! effects onto a broadcast bus.

mod audit;
mod driver;

pub use audit::{TransitionLog, TransitionRecord};
pub use driver::{OneShotEffect, ProfileController};
