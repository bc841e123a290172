use crate::loss::policy::LossPolicy;
use crate::time::Instant;

/// Per-station loss bookkeeping, embedded in the station record
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PeerLossState {
    lost_packets: u32,
    last_ack_time: Instant,
}

impl PeerLossState {
    pub fn new(created_at: Instant) -> Self {
        Self {
            lost_packets: 0,
            last_ack_time: created_at,
        }
    }

    /// Consecutive losses since the last acknowledgment or notification
    pub fn lost_packets(&self) -> u32 {
        self.lost_packets
    }

    pub fn last_ack_time(&self) -> Instant {
        self.last_ack_time
    }

    pub(crate) fn ack(&mut self, now: Instant) {
        if self.lost_packets != 0 {
            self.lost_packets = 0;
        }
        self.last_ack_time = now;
    }

    /// Counts one lost frame and returns `true` if the loss is now sustained enough to report
    ///
    /// Reporting resets the counter.
    pub(crate) fn record_loss(&mut self, now: Instant, policy: LossPolicy) -> bool {
        self.lost_packets = self.lost_packets.saturating_add(1);

        // A deadline past the end of the clock is never reached
        let sustained = self.lost_packets >= policy.threshold
            && self
                .last_ack_time
                .checked_add(policy.quiet_period)
                .is_some_and(|deadline| now > deadline);
        if sustained {
            self.lost_packets = 0;
        }

        sustained
    }
}
