use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TxOutcome {
    /// The peer acknowledged the frame
    Acked,
    /// The frame was sent expecting an acknowledgment, but none arrived
    Lost,
    /// No acknowledgment was solicited (e.g. group-addressed frames)
    NoAckExpected,
}

/// Status of one completed frame, as reported by the driver
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TxStatus {
    pub outcome: TxOutcome,
    /// The frame went out inside an aggregate whose block-ack status was not reported
    pub aggregated_without_status: bool,
}

impl TxStatus {
    pub fn acked() -> Self {
        Self {
            outcome: TxOutcome::Acked,
            aggregated_without_status: false,
        }
    }

    pub fn lost() -> Self {
        Self {
            outcome: TxOutcome::Lost,
            aggregated_without_status: false,
        }
    }

    pub fn no_ack_expected() -> Self {
        Self {
            outcome: TxOutcome::NoAckExpected,
            aggregated_without_status: false,
        }
    }
}

/// Driver capabilities relevant to software loss detection
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HwFlags {
    /// The driver reports per-frame acknowledgment status
    #[serde(default = "default_true")]
    pub reports_tx_ack_status: bool,
    /// The driver runs its own low-ack detection, so the software heuristic must stay out
    #[serde(default)]
    pub reports_low_ack: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HwFlags {
    fn default() -> Self {
        Self {
            reports_tx_ack_status: true,
            reports_low_ack: false,
        }
    }
}
