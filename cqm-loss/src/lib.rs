pub mod cqm;
pub mod loss;
pub mod replay;
pub mod station;
pub mod time;
pub mod trace;
pub mod tx_status;

pub use cqm::{CqmSink, PacketLossEvent, RecordingSink};
pub use loss::debouncer::{LossDebouncer, LossVerdict, TxStatusVerdict};
pub use station::Station;
pub use station::addr::MacAddr;
pub use time::Instant;
