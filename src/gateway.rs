//! Asynchronous profile persistence boundary.
//!
//! The controller never talks to a network directly; it calls a
//! `ProfileGateway` injected at construction time. The demo ships a
//! simulated gateway with configurable latency and failure rate.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::profile::Profile;

/// Errors a gateway operation can produce.
///
/// These never escape the controller loop; they are converted into
/// `LoadFailed`/`SaveFailed` events at the coordinator boundary.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
}

/// Async source of truth for profile records.
#[async_trait]
pub trait ProfileGateway: Send + Sync + 'static {
    async fn load(&self, user_id: u64) -> Result<Profile, GatewayError>;
    async fn save(&self, profile: Profile) -> Result<Profile, GatewayError>;
}

/// Fake repository for the demo: sleeps, then fails at a configured rate.
pub struct SimulatedGateway {
    delay: Duration,
    fail_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedGateway {
    /// `fail_rate` is the probability in `[0.0, 1.0]` that a call fails.
    pub fn new(delay: Duration, fail_rate: f64, seed: u64) -> Self {
        Self {
            delay,
            fail_rate: fail_rate.clamp(0.0, 1.0),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn roll_failure(&self) -> bool {
        self.rng.lock().gen::<f64>() < self.fail_rate
    }
}

#[async_trait]
impl ProfileGateway for SimulatedGateway {
    async fn load(&self, user_id: u64) -> Result<Profile, GatewayError> {
        tokio::time::sleep(self.delay).await;
        if self.roll_failure() {
            return Err(GatewayError::Network(
                "simulated network failure".to_string(),
            ));
        }
        Ok(Profile {
            id: user_id,
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
        })
    }

    async fn save(&self, profile: Profile) -> Result<Profile, GatewayError> {
        tokio::time::sleep(self.delay).await;
        if self.roll_failure() {
            return Err(GatewayError::Network(
                "simulated network failure".to_string(),
            ));
        }
        Ok(profile)
    }
}
