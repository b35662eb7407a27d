//! Effects requested by profile transitions.

use crate::machine::Effect;

use super::state::Profile;

/// Side work the profile machine can request.
///
/// `LoadProfile`/`SaveProfile` are re-entrant: the coordinator executes
/// them and feeds their outcome back as a new event. `Common` effects go
/// one way, to the presentation layer, and produce no follow-up event.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEffect {
    LoadProfile { user_id: u64 },
    SaveProfile { profile: Profile },
    Common(CommonEffect),
}

impl Effect for ProfileEffect {}

/// One-shot presentation effects shared across screens.
#[derive(Debug, Clone, PartialEq)]
pub enum CommonEffect {
    ShowSnackbar { message: String },
    ShowToast { message: String },
    Navigate { route: String },
    NavigateBack,
    TrackAnalytics { name: String },
    Haptic,
}

impl ProfileEffect {
    /// Shorthand for a snackbar request.
    pub fn snackbar(message: impl Into<String>) -> Self {
        Self::Common(CommonEffect::ShowSnackbar {
            message: message.into(),
        })
    }
}
