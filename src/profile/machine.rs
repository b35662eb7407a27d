//! Transition function for the profile screen.

use crate::machine::{Machine, TransitionResult};

use super::effect::ProfileEffect;
use super::event::ProfileEvent;
use super::form::ProfileForm;
use super::state::{Profile, ProfileState};

type Result = TransitionResult<ProfileState, ProfileEffect>;

/// The profile screen's state machine.
///
/// Pure: all side work is requested through `ProfileEffect` values and
/// executed by the controller. Dispatches on the state variant first,
/// then on the event within a per-state handler. Events that make no
/// sense in the current phase are ignored by policy, so the function is
/// total over its input domain.
pub struct ProfileMachine {
    user_id: u64,
}

impl ProfileMachine {
    pub fn new(user_id: u64) -> Self {
        Self { user_id }
    }

    /// Starting point for a fresh screen: `Loading` plus the initial fetch.
    pub fn init(&self) -> Result {
        TransitionResult::with_effect(
            ProfileState::Loading,
            ProfileEffect::LoadProfile {
                user_id: self.user_id,
            },
        )
    }

    fn on_loading(&self, event: ProfileEvent) -> Result {
        match event {
            ProfileEvent::ProfileLoaded(profile) => {
                TransitionResult::next(ProfileState::Viewing { profile })
            }
            ProfileEvent::LoadFailed(message) => TransitionResult::next(ProfileState::Error {
                message,
                retry: Some(ProfileEvent::RetryClicked),
            }),
            _ => TransitionResult::next(ProfileState::Loading),
        }
    }

    fn on_viewing(&self, profile: Profile, event: ProfileEvent) -> Result {
        match event {
            ProfileEvent::EditClicked => {
                let form = ProfileForm::from_profile(&profile);
                TransitionResult::next(ProfileState::Editing {
                    original: profile,
                    form,
                })
            }
            _ => TransitionResult::next(ProfileState::Viewing { profile }),
        }
    }

    fn on_editing(&self, original: Profile, form: ProfileForm, event: ProfileEvent) -> Result {
        match event {
            ProfileEvent::NameChanged(name) => TransitionResult::next(ProfileState::Editing {
                original,
                form: form.with_name(name),
            }),
            ProfileEvent::EmailChanged(email) => TransitionResult::next(ProfileState::Editing {
                original,
                form: form.with_email(email),
            }),
            ProfileEvent::SaveClicked => {
                if form.is_valid() {
                    let profile = form.merge_into(&original);
                    TransitionResult::with_effect(
                        ProfileState::Saving { original, form },
                        ProfileEffect::SaveProfile { profile },
                    )
                } else {
                    // Failed submit surfaces every field error at once,
                    // not just the last-touched field.
                    TransitionResult::with_effect(
                        ProfileState::Editing {
                            original,
                            form: form.validated(),
                        },
                        ProfileEffect::snackbar("Please fix the errors before saving"),
                    )
                }
            }
            ProfileEvent::CancelClicked => TransitionResult::next(ProfileState::Viewing {
                profile: original,
            }),
            _ => TransitionResult::next(ProfileState::Editing { original, form }),
        }
    }

    fn on_saving(&self, original: Profile, form: ProfileForm, event: ProfileEvent) -> Result {
        match event {
            ProfileEvent::ProfileSaved(profile) => TransitionResult::with_effect(
                ProfileState::Viewing { profile },
                ProfileEffect::snackbar("Profile saved"),
            ),
            ProfileEvent::SaveFailed(message) => TransitionResult::next(ProfileState::Error {
                message,
                retry: Some(ProfileEvent::SaveClicked),
            }),
            _ => TransitionResult::next(ProfileState::Saving { original, form }),
        }
    }

    fn on_error(
        &self,
        message: String,
        retry: Option<ProfileEvent>,
        event: ProfileEvent,
    ) -> Result {
        match event {
            // All retries route back through a fresh load, regardless of
            // which intent `retry` recorded. See DESIGN.md.
            ProfileEvent::RetryClicked if retry.is_some() => TransitionResult::with_effect(
                ProfileState::Loading,
                ProfileEffect::LoadProfile {
                    user_id: self.user_id,
                },
            ),
            _ => TransitionResult::next(ProfileState::Error { message, retry }),
        }
    }
}

impl Machine for ProfileMachine {
    type State = ProfileState;
    type Event = ProfileEvent;
    type Effect = ProfileEffect;

    fn transition(&self, state: ProfileState, event: ProfileEvent) -> Result {
        match state {
            ProfileState::Loading => self.on_loading(event),
            ProfileState::Viewing { profile } => self.on_viewing(profile, event),
            ProfileState::Editing { original, form } => self.on_editing(original, form, event),
            ProfileState::Saving { original, form } => self.on_saving(original, form, event),
            ProfileState::Error { message, retry } => self.on_error(message, retry, event),
        }
    }
}
