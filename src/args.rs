//! Command-line options for the demo binary.

use clap::Parser;

/// Scripted walkthrough of the profile state machine.
#[derive(Debug, Parser)]
#[command(name = "uniflow", version, about)]
pub struct Args {
    /// User id to load.
    #[arg(long, default_value_t = 1)]
    pub user_id: u64,

    /// Simulated network latency in milliseconds.
    #[arg(long, default_value_t = 150)]
    pub delay_ms: u64,

    /// Probability in [0.0, 1.0] that a simulated call fails.
    #[arg(long, default_value_t = 0.25)]
    pub fail_rate: f64,

    /// Seed for the simulated gateway, for reproducible runs.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
