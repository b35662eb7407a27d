//! Events driving the profile screen.

use crate::machine::Event;

use super::state::Profile;

/// Everything that can drive a profile transition: user intent plus the
/// outcomes the coordinator synthesizes from finished effects.
///
/// Events are immutable and ephemeral, consumed exactly once by the
/// transition function.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEvent {
    // User intent
    EditClicked,
    SaveClicked,
    CancelClicked,
    RetryClicked,
    NameChanged(String),
    EmailChanged(String),

    // Effect outcomes
    ProfileLoaded(Profile),
    ProfileSaved(Profile),
    LoadFailed(String),
    SaveFailed(String),
}

impl Event for ProfileEvent {}

impl ProfileEvent {
    /// Short variant name, used for logging and the transition audit log.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EditClicked => "EditClicked",
            Self::SaveClicked => "SaveClicked",
            Self::CancelClicked => "CancelClicked",
            Self::RetryClicked => "RetryClicked",
            Self::NameChanged(_) => "NameChanged",
            Self::EmailChanged(_) => "EmailChanged",
            Self::ProfileLoaded(_) => "ProfileLoaded",
            Self::ProfileSaved(_) => "ProfileSaved",
            Self::LoadFailed(_) => "LoadFailed",
            Self::SaveFailed(_) => "SaveFailed",
        }
    }
}
