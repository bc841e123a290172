use crate::station::spec::LinkKind;
use std::time::Duration;

/// Loss threshold for ordinary stations
pub const STA_LOST_PKT_THRESHOLD: u32 = 50;
/// Time without acknowledgments after which ordinary stations may be reported
pub const STA_LOST_PKT_TIME: Duration = Duration::from_secs(1);
/// Loss threshold for direct peer links
pub const STA_LOST_TDLS_PKT_THRESHOLD: u32 = 10;
/// Time without acknowledgments after which direct peer links may be reported
pub const STA_LOST_TDLS_PKT_TIME: Duration = Duration::from_secs(10);

/// The debounce parameters applied to a station's lost frames
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LossPolicy {
    /// Minimum number of consecutive losses before a notification may fire
    pub threshold: u32,
    /// Minimum time since the last acknowledged frame before a notification may fire
    pub quiet_period: Duration,
}

impl LossPolicy {
    pub const fn for_link(kind: LinkKind) -> Self {
        match kind {
            LinkKind::Ordinary => LossPolicy {
                threshold: STA_LOST_PKT_THRESHOLD,
                quiet_period: STA_LOST_PKT_TIME,
            },
            LinkKind::DirectPeerLink => LossPolicy {
                threshold: STA_LOST_TDLS_PKT_THRESHOLD,
                quiet_period: STA_LOST_TDLS_PKT_TIME,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_policy_by_link_kind() {
        let ordinary = LossPolicy::for_link(LinkKind::Ordinary);
        assert_eq!(ordinary.threshold, 50);
        assert_eq!(ordinary.quiet_period, Duration::from_secs(1));

        let direct = LossPolicy::for_link(LinkKind::DirectPeerLink);
        assert_eq!(direct.threshold, 10);
        assert_eq!(direct.quiet_period, Duration::from_secs(10));
    }
}
