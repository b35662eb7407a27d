//! Profile screen domain: state, events, effects, and the transition
//! function tying them together.
//!
//! The screen's whole behavior lives in `ProfileMachine::transition`.
//! Rendering and effect execution are somebody else's job: the
//! controller runs effects, observers render states.

mod effect;
mod event;
mod form;
mod machine;
mod state;

pub use effect::{CommonEffect, ProfileEffect};
pub use event::ProfileEvent;
pub use form::{validate_email, validate_name, ProfileForm};
pub use machine::ProfileMachine;
pub use state::{Profile, ProfileState};
