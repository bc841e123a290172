pub mod addr;
pub mod spec;
pub mod table;

use crate::loss::state::PeerLossState;
use crate::station::addr::MacAddr;
use crate::station::spec::{LinkKind, StationSpec};
use crate::time::Instant;

/// A peer station record, as seen by the transmit-status path
#[derive(Clone, Debug)]
pub struct Station {
    addr: MacAddr,
    kind: LinkKind,
    removing: bool,
    pub(crate) loss: PeerLossState,
}

impl Station {
    pub fn new(spec: StationSpec, created_at: Instant) -> Self {
        Self {
            addr: spec.addr,
            kind: spec.kind,
            removing: false,
            loss: PeerLossState::new(created_at),
        }
    }

    pub fn addr(&self) -> MacAddr {
        self.addr
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    pub fn loss(&self) -> &PeerLossState {
        &self.loss
    }

    /// Whether loss accounting applies to this station
    ///
    /// Once teardown has begun, lost frames are no longer counted.
    pub fn is_loss_eligible(&self) -> bool {
        !self.removing
    }

    pub(crate) fn begin_removal(&mut self) {
        self.removing = true;
    }
}
