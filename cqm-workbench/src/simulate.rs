use crate::config::cli::SimulateOpt;
use anyhow::{Context, bail};
use cqm_loss::MacAddr;
use cqm_loss::replay::{TraceEvent, TraceEventPayload};
use cqm_loss::tx_status::TxStatus;
use fastrand::Rng;
use std::time::Duration;

pub struct SyntheticTraffic {
    pub station: MacAddr,
    pub seed: u64,
    pub events: Vec<TraceEvent>,
}

/// Generates one frame per interval for a single station, applying random loss and an optional
/// full outage
pub fn generate(options: &SimulateOpt) -> anyhow::Result<SyntheticTraffic> {
    let station: MacAddr = options
        .station
        .parse()
        .context("invalid station address")?;
    if options.packet_interval_ms == 0 {
        bail!("packet interval must be greater than zero");
    }
    for (name, ratio) in [
        ("packet loss ratio", options.packet_loss_ratio),
        ("no-ack ratio", options.no_ack_ratio),
    ] {
        if !(0.0..=1.0).contains(&ratio) {
            bail!("{name} must be between 0 and 1, got {ratio}");
        }
    }

    let seed = if options.non_deterministic {
        Rng::new().u64(..)
    } else {
        options.seed
    };
    let mut rng = Rng::with_seed(seed);

    let outage = match (options.outage_start_ms, options.outage_duration_ms) {
        (Some(start), Some(duration)) => Some(start..start.saturating_add(duration)),
        _ => None,
    };

    let mut events = Vec::new();
    let mut time_ms = 0;
    while time_ms < options.duration_ms {
        let in_outage = outage.as_ref().is_some_and(|o| o.contains(&time_ms));
        let status = if rng.f64() < options.no_ack_ratio {
            TxStatus::no_ack_expected()
        } else if in_outage || rng.f64() < options.packet_loss_ratio {
            TxStatus::lost()
        } else {
            TxStatus::acked()
        };

        events.push(TraceEvent {
            relative_time: Duration::from_millis(time_ms),
            station,
            payload: TraceEventPayload::TxStatus(status),
        });

        match time_ms.checked_add(options.packet_interval_ms) {
            Some(next) => time_ms = next,
            None => break,
        }
    }

    Ok(SyntheticTraffic {
        station,
        seed,
        events,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use cqm_loss::tx_status::TxOutcome;

    fn default_options() -> SimulateOpt {
        SimulateOpt {
            station: "02:00:00:00:00:01".to_string(),
            duration_ms: 1_000,
            packet_interval_ms: 10,
            packet_loss_ratio: 0.0,
            no_ack_ratio: 0.0,
            outage_start_ms: None,
            outage_duration_ms: None,
            seed: 42,
            non_deterministic: false,
        }
    }

    fn outcomes(traffic: &SyntheticTraffic) -> Vec<TxOutcome> {
        traffic
            .events
            .iter()
            .map(|e| match &e.payload {
                TraceEventPayload::TxStatus(status) => status.outcome,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_outage_loses_every_frame() {
        let options = SimulateOpt {
            outage_start_ms: Some(200),
            outage_duration_ms: Some(300),
            ..default_options()
        };
        let traffic = generate(&options).unwrap();

        assert_eq!(traffic.events.len(), 100);
        for (event, outcome) in traffic.events.iter().zip(outcomes(&traffic)) {
            let ms = event.relative_time.as_millis();
            let expected = if (200..500).contains(&ms) {
                TxOutcome::Lost
            } else {
                TxOutcome::Acked
            };
            assert_eq!(outcome, expected, "{ms}");
        }
    }

    #[test]
    fn test_same_seed_same_traffic() {
        let options = SimulateOpt {
            packet_loss_ratio: 0.3,
            no_ack_ratio: 0.1,
            ..default_options()
        };

        let first = outcomes(&generate(&options).unwrap());
        let second = outcomes(&generate(&options).unwrap());
        assert_eq!(first, second);
        assert!(first.contains(&TxOutcome::Lost));
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let options = SimulateOpt {
            packet_loss_ratio: 1.5,
            ..default_options()
        };
        assert!(generate(&options).is_err());

        let options = SimulateOpt {
            station: "not-a-mac".to_string(),
            ..default_options()
        };
        assert!(generate(&options).is_err());
    }

    #[test]
    fn test_generation_stops_at_end_of_clock() {
        let options = SimulateOpt {
            duration_ms: u64::MAX,
            packet_interval_ms: u64::MAX / 2 + 1,
            ..default_options()
        };
        let traffic = generate(&options).unwrap();

        let times: Vec<_> = traffic.events.iter().map(|e| e.relative_time).collect();
        assert_eq!(
            times,
            vec![Duration::ZERO, Duration::from_millis(u64::MAX / 2 + 1)]
        );
    }
}
