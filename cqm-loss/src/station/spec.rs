use crate::station::addr::MacAddr;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    /// A regular station, reached through (or acting as) an access point
    Ordinary,
    /// A direct station-to-station link (TDLS) bypassing the access point
    DirectPeerLink,
}

#[derive(Copy, Clone, Debug)]
pub struct StationSpec {
    pub addr: MacAddr,
    pub kind: LinkKind,
}
