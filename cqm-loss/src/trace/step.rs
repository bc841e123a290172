use crate::loss::debouncer::IgnoreReason;
use crate::station::addr::MacAddr;
use crate::station::spec::LinkKind;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, DurationNanoSeconds, serde_as};
use std::time::Duration;

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayStep {
    #[serde_as(as = "DurationNanoSeconds")]
    #[serde(rename = "relative_time_ns")]
    pub relative_time: Duration,
    #[serde_as(as = "DisplayFromStr")]
    pub station: MacAddr,
    #[serde(flatten)]
    pub kind: ReplayStepKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "data")]
pub enum ReplayStepKind {
    /// The station record was created
    StationAdded { kind: LinkKind },
    /// The station record started being torn down
    StationRemoving,
    /// The station record was destroyed
    StationRemoved,
    /// A frame was acknowledged, resetting the loss streak
    FrameAcked { previous_lost_packets: u32 },
    /// A frame that did not solicit an acknowledgment completed
    FrameNoAck,
    /// A lost frame was counted
    FrameLost { lost_packets: u32 },
    /// A lost frame was not counted
    FrameLostIgnored { reason: IgnoreReason },
    /// A lost frame made the loss sustained and a notification was emitted
    PacketLossNotified { lost_packets: u32 },
}
