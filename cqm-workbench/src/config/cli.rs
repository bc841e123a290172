use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct CliOpt {
    /// Path to the JSON file describing the interface, its driver and its stations
    #[arg(long)]
    pub stations: PathBuf,

    /// If provided, the recorded replay steps are written to this path as JSON
    #[arg(long)]
    pub replay_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replay a recorded trace of transmit-status and station events
    Replay(ReplayOpt),
    /// Generate synthetic traffic for a single station and replay it
    Simulate(SimulateOpt),
}

#[derive(Parser, Debug, Clone)]
pub struct ReplayOpt {
    /// Path to the JSON file containing the trace events
    #[arg(long)]
    pub trace: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct SimulateOpt {
    /// The address of the station that receives the traffic (must be present in the station
    /// config)
    #[arg(long)]
    pub station: String,

    /// The duration of the run, after which no more frames are sent
    #[arg(long)]
    pub duration_ms: u64,

    /// The interval at which frames are sent
    #[arg(long, default_value_t = 10)]
    pub packet_interval_ms: u64,

    /// The ratio of frames that will not be acknowledged (the value must be between 0 and 1)
    #[arg(long, default_value_t = 0.0)]
    pub packet_loss_ratio: f64,

    /// The ratio of frames sent without soliciting an acknowledgment (the value must be between 0
    /// and 1)
    #[arg(long, default_value_t = 0.0)]
    pub no_ack_ratio: f64,

    /// Start of a period during which every frame is lost
    #[arg(long, requires = "outage_duration_ms")]
    pub outage_start_ms: Option<u64>,

    /// Length of the period during which every frame is lost
    #[arg(long, requires = "outage_start_ms")]
    pub outage_duration_ms: Option<u64>,

    /// The random seed governing loss, which you can control to generate deterministic results
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Whether the run should be non-deterministic, i.e. using a non-constant seed
    #[arg(long)]
    pub non_deterministic: bool,
}
