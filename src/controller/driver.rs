//! Controller: owns the state cell and runs the effect loop.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use uuid::Uuid;

use crate::gateway::ProfileGateway;
use crate::machine::{Machine, TransitionResult};
use crate::profile::{CommonEffect, ProfileEffect, ProfileEvent, ProfileMachine, ProfileState};

use super::audit::{TransitionLog, TransitionRecord};

/// Buffered one-shot emissions per subscriber before lagging receivers
/// start dropping.
const EFFECT_BUS_CAPACITY: usize = 16;

/// A single one-shot effect emission.
///
/// The id distinguishes repeated identical requests (two "Profile saved"
/// snackbars in a row) so displays can stay idempotent per emission.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShotEffect {
    pub id: Uuid,
    pub effect: CommonEffect,
}

/// Owns the current `ProfileState` and coordinates effect execution.
///
/// Events are processed strictly one at a time against the current
/// state: read, transition, publish is atomic per event. Asynchronous
/// effects run on their own tasks and re-enter the loop by enqueueing
/// outcome events, so completions are interpreted against whatever state
/// is current when they arrive. There is no cancellation of in-flight
/// work; a stale completion resolves as a per-state no-op.
///
/// The driver task lives until the hosting runtime is torn down.
pub struct ProfileController {
    event_tx: mpsc::UnboundedSender<ProfileEvent>,
    state_rx: watch::Receiver<ProfileState>,
    effect_tx: broadcast::Sender<OneShotEffect>,
    audit: Arc<TransitionLog>,
}

impl ProfileController {
    /// Spawn the driver task and kick off the initial load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(machine: ProfileMachine, gateway: Arc<dyn ProfileGateway>) -> Self {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (effect_tx, _) = broadcast::channel(EFFECT_BUS_CAPACITY);
        let audit = Arc::new(TransitionLog::new());

        let TransitionResult {
            state: initial_state,
            effects: initial_effects,
        } = machine.init();
        let (state_tx, state_rx) = watch::channel(initial_state.clone());

        let mut driver = Driver {
            machine,
            gateway,
            state: initial_state,
            state_tx,
            effect_tx: effect_tx.clone(),
            loopback: event_tx.clone(),
            audit: Arc::clone(&audit),
        };

        tokio::spawn(async move {
            driver.run_effects(initial_effects);
            while let Some(event) = event_rx.recv().await {
                driver.step(event);
            }
        });

        Self {
            event_tx,
            state_rx,
            effect_tx,
            audit,
        }
    }

    /// Sole inbound entry point: enqueue an event for processing.
    ///
    /// Fire-and-forget; outcomes are observed through state publications
    /// and the one-shot effect bus.
    pub fn dispatch(&self, event: ProfileEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ProfileState {
        self.state_rx.borrow().clone()
    }

    /// Receiver for awaiting state publications.
    pub fn watch(&self) -> watch::Receiver<ProfileState> {
        self.state_rx.clone()
    }

    /// Subscribe to one-shot effects.
    ///
    /// Each emission reaches subscribers active at emission time exactly
    /// once; past emissions are never replayed.
    pub fn subscribe_effects(&self) -> broadcast::Receiver<OneShotEffect> {
        self.effect_tx.subscribe()
    }

    /// Copy of the transition audit log.
    pub fn audit(&self) -> Vec<TransitionRecord> {
        self.audit.snapshot()
    }
}

/// Driver state, owned by the spawned task.
struct Driver {
    machine: ProfileMachine,
    gateway: Arc<dyn ProfileGateway>,
    state: ProfileState,
    state_tx: watch::Sender<ProfileState>,
    effect_tx: broadcast::Sender<OneShotEffect>,
    loopback: mpsc::UnboundedSender<ProfileEvent>,
    audit: Arc<TransitionLog>,
}

impl Driver {
    /// Process one event: transition, publish, execute effects.
    fn step(&mut self, event: ProfileEvent) {
        let from = self.state.variant_label();
        let event_label = event.label();

        let result = self.machine.transition(self.state.clone(), event);

        if result.is_noop(&self.state) {
            tracing::trace!(state = from, event = event_label, "event ignored");
        }
        let to = result.state.variant_label();
        if to != from {
            self.audit.record(from, event_label, to);
            tracing::debug!(from, event = event_label, to, "state transition");
        }

        self.state = result.state;
        let _ = self.state_tx.send(self.state.clone());

        self.run_effects(result.effects);
    }

    fn run_effects(&self, effects: Vec<ProfileEffect>) {
        for effect in effects {
            match effect {
                ProfileEffect::LoadProfile { user_id } => {
                    let gateway = Arc::clone(&self.gateway);
                    let loopback = self.loopback.clone();
                    tokio::spawn(async move {
                        let event = match gateway.load(user_id).await {
                            Ok(profile) => ProfileEvent::ProfileLoaded(profile),
                            Err(err) => {
                                tracing::warn!(error = %err, user_id, "profile load failed");
                                ProfileEvent::LoadFailed(err.to_string())
                            }
                        };
                        let _ = loopback.send(event);
                    });
                }
                ProfileEffect::SaveProfile { profile } => {
                    let gateway = Arc::clone(&self.gateway);
                    let loopback = self.loopback.clone();
                    tokio::spawn(async move {
                        let event = match gateway.save(profile).await {
                            Ok(saved) => ProfileEvent::ProfileSaved(saved),
                            Err(err) => {
                                tracing::warn!(error = %err, "profile save failed");
                                ProfileEvent::SaveFailed(err.to_string())
                            }
                        };
                        let _ = loopback.send(event);
                    });
                }
                ProfileEffect::Common(effect) => {
                    // No subscribers is fine: one-shot effects are
                    // fire-and-forget.
                    let _ = self.effect_tx.send(OneShotEffect {
                        id: Uuid::new_v4(),
                        effect,
                    });
                }
            }
        }
    }
}
