use std::ops::Add;
use std::time::Duration;

/// A point on the monotonic tick clock driving the transmit-status pipeline
///
/// The epoch is arbitrary; instants are only meaningful relative to each other.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Instant(Duration);

impl Instant {
    pub const ZERO: Instant = Instant(Duration::ZERO);

    pub fn from_ticks(since_epoch: Duration) -> Self {
        Self(since_epoch)
    }

    pub fn ticks(&self) -> Duration {
        self.0
    }

    /// Returns `None` when the result would not fit on the clock
    pub fn checked_add(&self, duration: Duration) -> Option<Instant> {
        self.0.checked_add(duration).map(Instant)
    }

    pub fn saturating_duration_since(&self, earlier: Instant) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}
