//! Shared test utilities and the scripted gateway.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use uniflow::gateway::{GatewayError, ProfileGateway};
use uniflow::profile::{Profile, ProfileForm, ProfileState};

pub fn profile() -> Profile {
    Profile {
        id: 7,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
    }
}

pub fn valid_form() -> ProfileForm {
    ProfileForm::from_profile(&profile())
}

/// Gateway whose outcomes are queued up front, in call order.
///
/// An unscripted call fails with a recognizable error rather than
/// panicking inside a spawned task.
#[derive(Default)]
pub struct ScriptedGateway {
    loads: Mutex<VecDeque<Result<Profile, GatewayError>>>,
    saves: Mutex<VecDeque<Result<Profile, GatewayError>>>,
}

impl ScriptedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_load(&self, outcome: Result<Profile, GatewayError>) {
        self.loads.lock().push_back(outcome);
    }

    pub fn script_save(&self, outcome: Result<Profile, GatewayError>) {
        self.saves.lock().push_back(outcome);
    }
}

#[async_trait]
impl ProfileGateway for ScriptedGateway {
    async fn load(&self, _user_id: u64) -> Result<Profile, GatewayError> {
        self.loads
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("unscripted load".to_string())))
    }

    async fn save(&self, _profile: Profile) -> Result<Profile, GatewayError> {
        self.saves
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("unscripted save".to_string())))
    }
}

/// Await a state matching `pred`, with a test-sized timeout.
pub async fn wait_for_state(
    states: &mut watch::Receiver<ProfileState>,
    pred: impl FnMut(&ProfileState) -> bool,
) -> ProfileState {
    tokio::time::timeout(Duration::from_secs(5), states.wait_for(pred))
        .await
        .expect("timed out waiting for state")
        .expect("controller dropped")
        .clone()
}
