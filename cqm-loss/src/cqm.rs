use crate::station::addr::MacAddr;
use parking_lot::Mutex;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

/// A connection quality monitoring packet-loss notification
#[serde_as]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PacketLossEvent {
    #[serde_as(as = "DisplayFromStr")]
    pub peer: MacAddr,
    pub lost_packets: u32,
}

/// Receives packet-loss notifications for the stations of one interface
///
/// Delivery is fire-and-forget: nothing flows back to the caller.
pub trait CqmSink: Send + Sync {
    fn pkt_loss_notify(&self, event: PacketLossEvent);
}

/// Keeps every notification it receives, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PacketLossEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PacketLossEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl CqmSink for RecordingSink {
    fn pkt_loss_notify(&self, event: PacketLossEvent) {
        self.events.lock().push(event);
    }
}
