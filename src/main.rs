//! Demo: drive the profile machine through a scripted edit/save session.
//!
//! Prints every state publication milestone, every one-shot effect, and
//! the transition audit log at the end. `--fail-rate` and `--seed`
//! control the simulated gateway, so failure paths are reproducible.

mod args;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use uniflow::controller::{OneShotEffect, ProfileController};
use uniflow::gateway::SimulatedGateway;
use uniflow::profile::{ProfileEvent, ProfileMachine, ProfileState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = args::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let gateway = Arc::new(SimulatedGateway::new(
        Duration::from_millis(args.delay_ms),
        args.fail_rate,
        args.seed,
    ));
    let controller = ProfileController::spawn(ProfileMachine::new(args.user_id), gateway);

    let mut effects = controller.subscribe_effects();
    tokio::spawn(async move {
        while let Ok(OneShotEffect { effect, .. }) = effects.recv().await {
            println!("[effect] {:?}", effect);
        }
    });

    let mut states = controller.watch();

    // Initial load, with one manual retry on failure.
    wait_for(&mut states, |s| !matches!(s, ProfileState::Loading)).await?;
    if let ProfileState::Error { message, .. } = controller.state() {
        println!("[demo] initial load failed ({message}), retrying");
        controller.dispatch(ProfileEvent::RetryClicked);
        wait_for(&mut states, |s| !matches!(s, ProfileState::Loading)).await?;
    }

    let ProfileState::Viewing { profile } = controller.state() else {
        print_audit(&controller);
        anyhow::bail!("could not load profile, try a lower --fail-rate");
    };
    println!("[demo] loaded {} <{}>", profile.name, profile.email);

    // Edit, trip validation once, fix the draft, then save for real.
    controller.dispatch(ProfileEvent::EditClicked);
    controller.dispatch(ProfileEvent::NameChanged("J".to_string()));
    controller.dispatch(ProfileEvent::SaveClicked);
    controller.dispatch(ProfileEvent::NameChanged("Janet Doe".to_string()));
    controller.dispatch(ProfileEvent::EmailChanged("janet.doe@example.com".to_string()));
    controller.dispatch(ProfileEvent::SaveClicked);

    wait_for(&mut states, |s| matches!(s, ProfileState::Saving { .. })).await?;
    wait_for(&mut states, |s| !s.is_busy()).await?;

    match controller.state() {
        ProfileState::Viewing { profile } => {
            println!("[demo] saved {} <{}>", profile.name, profile.email);
        }
        ProfileState::Error { message, .. } => {
            println!("[demo] save failed: {message}");
        }
        other => println!("[demo] ended in {}", other.variant_label()),
    }

    // Let the effect printer drain before the audit dump.
    tokio::time::sleep(Duration::from_millis(50)).await;
    print_audit(&controller);
    Ok(())
}

async fn wait_for(
    states: &mut watch::Receiver<ProfileState>,
    pred: impl Fn(&ProfileState) -> bool,
) -> Result<()> {
    tokio::time::timeout(Duration::from_secs(10), states.wait_for(|s| pred(s))).await??;
    Ok(())
}

fn print_audit(controller: &ProfileController) {
    println!("[demo] transition log:");
    for record in controller.audit() {
        println!("  {record}");
    }
}
