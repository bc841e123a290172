use crate::loss::debouncer::{IgnoreReason, LossVerdict, TxStatusVerdict};
use crate::station::addr::MacAddr;
use crate::station::spec::LinkKind;
use crate::time::Instant;
use crate::trace::stats::StationStats;
use crate::trace::step::{ReplayStep, ReplayStepKind};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashSet};

/// Records every decision taken while replaying transmit-status events
#[derive(Default)]
pub struct LossTracer {
    recorded_steps: Mutex<Vec<ReplayStep>>,
    already_warned_removing: Mutex<HashSet<MacAddr>>,
}

impl LossTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<ReplayStep> {
        self.recorded_steps.lock().clone()
    }

    pub fn stats(&self) -> BTreeMap<MacAddr, StationStats> {
        let mut stats: BTreeMap<MacAddr, StationStats> = BTreeMap::new();
        for step in self.recorded_steps.lock().iter() {
            stats.entry(step.station).or_default().track(&step.kind);
        }

        stats
    }

    fn record(&self, now: Instant, station: MacAddr, kind: ReplayStepKind) {
        self.recorded_steps.lock().push(ReplayStep {
            relative_time: now.ticks(),
            station,
            kind,
        });
    }

    pub fn track_station_added(&self, now: Instant, station: MacAddr, kind: LinkKind) {
        self.record(now, station, ReplayStepKind::StationAdded { kind });
    }

    pub fn track_station_removing(&self, now: Instant, station: MacAddr) {
        self.record(now, station, ReplayStepKind::StationRemoving);
    }

    pub fn track_station_removed(&self, now: Instant, station: MacAddr) {
        self.already_warned_removing.lock().remove(&station);
        self.record(now, station, ReplayStepKind::StationRemoved);
    }

    pub fn track_tx_status(
        &self,
        now: Instant,
        station: MacAddr,
        previous_lost_packets: u32,
        verdict: TxStatusVerdict,
    ) {
        let kind = match verdict {
            TxStatusVerdict::Skipped => return,
            TxStatusVerdict::Acked => ReplayStepKind::FrameAcked {
                previous_lost_packets,
            },
            TxStatusVerdict::NoAckExpected => ReplayStepKind::FrameNoAck,
            TxStatusVerdict::Lost(LossVerdict::Accumulating { lost_packets }) => {
                ReplayStepKind::FrameLost { lost_packets }
            }
            TxStatusVerdict::Lost(LossVerdict::Ignored(reason)) => {
                let first_ignored = reason == IgnoreReason::StationNotEligible
                    && self.already_warned_removing.lock().insert(station);
                if first_ignored {
                    println!(
                        "{:.2}s WARN lost frame for {station} ignored because the station is being removed (Note: further warnings for this station will be omitted to avoid cluttering the output)",
                        now.ticks().as_secs_f64(),
                    );
                }

                ReplayStepKind::FrameLostIgnored { reason }
            }
            TxStatusVerdict::Lost(LossVerdict::Notified(event)) => {
                println!(
                    "{:.2}s WARN {} sustained packet loss reported ({} packets)!",
                    now.ticks().as_secs_f64(),
                    event.peer,
                    event.lost_packets,
                );

                ReplayStepKind::PacketLossNotified {
                    lost_packets: event.lost_packets,
                }
            }
        };

        self.record(now, station, kind);
    }
}
