use crate::trace::step::ReplayStepKind;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub acked: u64,
    pub lost: u64,
    pub no_ack: u64,
    pub lost_ignored: u64,
    pub notifications: u64,
    /// The longest run of counted losses without an acknowledgment in between
    pub max_lost_streak: u64,
    current_streak: u64,
}

impl StationStats {
    pub fn track(&mut self, step: &ReplayStepKind) {
        match step {
            ReplayStepKind::FrameAcked { .. } => {
                self.acked += 1;
                self.current_streak = 0;
            }
            ReplayStepKind::FrameNoAck => self.no_ack += 1,
            ReplayStepKind::FrameLost { .. } => self.track_lost(),
            ReplayStepKind::FrameLostIgnored { .. } => self.lost_ignored += 1,
            ReplayStepKind::PacketLossNotified { .. } => {
                // The frame that triggered the notification was lost too
                self.track_lost();
                self.notifications += 1;
            }
            ReplayStepKind::StationAdded { .. } => self.current_streak = 0,
            ReplayStepKind::StationRemoving | ReplayStepKind::StationRemoved => {}
        }
    }

    fn track_lost(&mut self) {
        self.lost += 1;
        self.current_streak += 1;
        self.max_lost_streak = self.max_lost_streak.max(self.current_streak);
    }
}
