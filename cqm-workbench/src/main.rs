mod config;
mod simulate;
mod util;

use crate::config::cli::{CliOpt, Command};
use anyhow::{Context, bail};
use clap::Parser;
use cqm_loss::RecordingSink;
use cqm_loss::replay::{Replay, ReplaySpec, TraceEvent, TraceEvents};
use cqm_loss::trace::tracer::LossTracer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = CliOpt::parse();
    run(options)
}

fn run(options: CliOpt) -> anyhow::Result<()> {
    let station_config = config::load_stations(&options.stations)?;

    println!("--- Params ---");
    println!("* Station config path: {}", options.stations.display());
    println!("* Interface: {}", station_config.interface());
    let hw = station_config.driver();
    println!("* Driver reports tx ack status: {}", hw.reports_tx_ack_status);
    println!("* Driver handles low-ack detection: {}", hw.reports_low_ack);

    let events: Vec<TraceEvent> = match &options.command {
        Command::Replay(opt) => {
            println!("* Trace path: {}", opt.trace.display());
            config::load_trace(&opt.trace)?
                .into_iter()
                .map(|e| e.into())
                .collect()
        }
        Command::Simulate(opt) => {
            let traffic = simulate::generate(opt)?;
            if !station_config.contains(traffic.station) {
                bail!(
                    "station `{}` is not present in the station config",
                    traffic.station
                );
            }
            println!("* Seed: {}", traffic.seed);
            println!(
                "* Frames: {} (one every {} ms)",
                traffic.events.len(),
                opt.packet_interval_ms
            );
            traffic.events
        }
    };

    let sink = Arc::new(RecordingSink::new());
    let tracer = Arc::new(LossTracer::new());
    let spec: ReplaySpec = station_config.into();

    tracing::debug!(events = events.len(), "starting replay");
    println!("--- Replay ---");
    let mut replay = Replay::new(spec, sink.clone(), tracer.clone())
        .context("invalid station config")?;
    replay
        .run(TraceEvents::new(events))
        .context("invalid trace")?;

    util::print_notifications(&sink);
    util::print_station_stats(&tracer, &replay);

    if let Some(path) = &options.replay_log {
        let steps = serde_json::to_string_pretty(&tracer.steps())
            .context("failed to serialize replay log")?;
        std::fs::write(path, steps)
            .with_context(|| format!("failed to write replay log to `{}`", path.display()))?;
        println!("--- Replay log written to {} ---", path.display());
    }

    Ok(())
}
