use crate::cqm::{CqmSink, PacketLossEvent};
use crate::loss::policy::LossPolicy;
use crate::station::Station;
use crate::time::Instant;
use crate::tx_status::{HwFlags, TxOutcome, TxStatus};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// The driver performs its own loss kickout
    DriverHandlesLossDetection,
    /// The station is being torn down
    StationNotEligible,
    /// The frame was aggregated but carries no status of its own
    AggregatedWithoutStatus,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LossVerdict {
    Ignored(IgnoreReason),
    /// The loss was counted, but the station does not qualify for a notification yet
    Accumulating { lost_packets: u32 },
    Notified(PacketLossEvent),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TxStatusVerdict {
    /// The driver does not report ack status, so nothing was evaluated
    Skipped,
    Acked,
    NoAckExpected,
    Lost(LossVerdict),
}

/// Resets the loss counter and refreshes the last acknowledgment time
pub fn on_ack_success(station: &mut Station, now: Instant) {
    station.loss.ack(now);
}

/// Frames that never solicited an acknowledgment say nothing about the link
pub fn on_ack_no_expectation(_station: &Station) {}

/// Accounts for one lost frame, notifying `sink` if the loss has become sustained
///
/// A notification requires both the link's loss threshold to be reached and its quiet period to
/// have elapsed since the last acknowledgment. The notification carries the threshold rather than
/// the running count.
pub fn on_lost(
    station: &mut Station,
    now: Instant,
    driver_handles_own_loss_detection: bool,
    sink: &dyn CqmSink,
) -> LossVerdict {
    if driver_handles_own_loss_detection {
        return LossVerdict::Ignored(IgnoreReason::DriverHandlesLossDetection);
    }

    if !station.is_loss_eligible() {
        tracing::debug!(peer = %station.addr(), "ignoring lost frame for station in teardown");
        return LossVerdict::Ignored(IgnoreReason::StationNotEligible);
    }

    let policy = LossPolicy::for_link(station.kind());
    if !station.loss.record_loss(now, policy) {
        return LossVerdict::Accumulating {
            lost_packets: station.loss.lost_packets(),
        };
    }

    let event = PacketLossEvent {
        peer: station.addr(),
        lost_packets: policy.threshold,
    };

    tracing::info!(
        peer = %event.peer,
        lost_packets = event.lost_packets,
        silent_for = ?now.saturating_duration_since(station.loss.last_ack_time()),
        "sustained packet loss"
    );
    sink.pkt_loss_notify(event);

    LossVerdict::Notified(event)
}

/// Entry point for the transmit-status path, invoked once per completed frame
#[derive(Copy, Clone, Debug, Default)]
pub struct LossDebouncer {
    hw: HwFlags,
}

impl LossDebouncer {
    pub fn new(hw: HwFlags) -> Self {
        Self { hw }
    }

    pub fn on_tx_status(
        &self,
        station: &mut Station,
        status: &TxStatus,
        now: Instant,
        sink: &dyn CqmSink,
    ) -> TxStatusVerdict {
        if !self.hw.reports_tx_ack_status {
            return TxStatusVerdict::Skipped;
        }

        match status.outcome {
            TxOutcome::Acked => {
                on_ack_success(station, now);
                TxStatusVerdict::Acked
            }
            TxOutcome::NoAckExpected => {
                on_ack_no_expectation(station);
                TxStatusVerdict::NoAckExpected
            }
            TxOutcome::Lost if status.aggregated_without_status => {
                TxStatusVerdict::Lost(LossVerdict::Ignored(IgnoreReason::AggregatedWithoutStatus))
            }
            TxOutcome::Lost => TxStatusVerdict::Lost(on_lost(
                station,
                now,
                self.hw.reports_low_ack,
                sink,
            )),
        }
    }
}
