//! State of the profile screen.

use crate::machine::MachineState;

use super::event::ProfileEvent;
use super::form::ProfileForm;

/// The confirmed domain record for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Everything the profile screen can exclusively be.
///
/// Exactly one variant is active at a time; no field of one variant is
/// reachable unless that variant is current. This replaces the
/// boolean-flag combination (`is_loading && is_editing && has_error`)
/// with a single exhaustively-matched union.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    /// Initial fetch in flight.
    #[default]
    Loading,

    /// Showing the last confirmed record.
    Viewing { profile: Profile },

    /// User is editing a draft. `original` is kept for cancel/rollback.
    Editing {
        original: Profile,
        form: ProfileForm,
    },

    /// Save in flight; the form is frozen until it resolves.
    Saving {
        original: Profile,
        form: ProfileForm,
    },

    /// A load or save failed. `retry` records which user intent the
    /// retry affordance should stand in for, when one applies.
    Error {
        message: String,
        retry: Option<ProfileEvent>,
    },
}

impl MachineState for ProfileState {}

impl ProfileState {
    /// Short variant name, used for logging and the transition audit log.
    pub fn variant_label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Viewing { .. } => "Viewing",
            Self::Editing { .. } => "Editing",
            Self::Saving { .. } => "Saving",
            Self::Error { .. } => "Error",
        }
    }

    /// True while an asynchronous operation is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Saving { .. })
    }

    /// The confirmed record visible in this state, if any.
    ///
    /// For `Editing`/`Saving` this is the pre-edit original, not the draft.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Viewing { profile } => Some(profile),
            Self::Editing { original, .. } | Self::Saving { original, .. } => Some(original),
            _ => None,
        }
    }

    /// The current form draft, if one exists.
    pub fn form(&self) -> Option<&ProfileForm> {
        match self {
            Self::Editing { form, .. } | Self::Saving { form, .. } => Some(form),
            _ => None,
        }
    }

    /// The current failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True if the error state offers a retry affordance.
    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Error { retry: Some(_), .. })
    }
}
