use crate::cqm::CqmSink;
use crate::loss::debouncer::LossDebouncer;
use crate::station::addr::MacAddr;
use crate::station::spec::{LinkKind, StationSpec};
use crate::station::table::StationTable;
use crate::time::Instant;
use crate::trace::tracer::LossTracer;
use crate::tx_status::{HwFlags, TxStatus};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidTrace {
    #[error("station `{addr}` was added but it already exists on interface `{iface}`")]
    DuplicateStation { iface: Arc<str>, addr: MacAddr },
    #[error("station `{addr}` was referenced by a lifecycle event but does not exist")]
    MissingStation { addr: MacAddr },
}

pub struct ReplaySpec {
    pub iface: Arc<str>,
    pub hw: HwFlags,
    /// Stations that exist when the replay starts
    pub stations: Vec<StationSpec>,
}

pub struct TraceEvents {
    pub(crate) sorted_events: Vec<TraceEvent>,
}

impl TraceEvents {
    pub fn new(mut events: Vec<TraceEvent>) -> Self {
        // Stable, so events sharing a timestamp keep their relative order
        events.sort_by_key(|e| e.relative_time);
        Self {
            sorted_events: events,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TraceEvent {
    pub relative_time: Duration,
    pub station: MacAddr,
    pub payload: TraceEventPayload,
}

#[derive(Clone, Debug)]
pub enum TraceEventPayload {
    TxStatus(TxStatus),
    StationAdded(LinkKind),
    StationRemoving,
    StationRemoved,
}

/// Feeds a trace of transmit-status and station lifecycle events through the loss debouncer
pub struct Replay {
    table: StationTable,
    debouncer: LossDebouncer,
    sink: Arc<dyn CqmSink>,
    tracer: Arc<LossTracer>,
}

impl Replay {
    pub fn new(
        spec: ReplaySpec,
        sink: Arc<dyn CqmSink>,
        tracer: Arc<LossTracer>,
    ) -> Result<Self, InvalidTrace> {
        let mut replay = Self {
            table: StationTable::new(spec.iface),
            debouncer: LossDebouncer::new(spec.hw),
            sink,
            tracer,
        };

        for station in spec.stations {
            replay.add_station(Instant::ZERO, station)?;
        }

        Ok(replay)
    }

    pub fn stations(&self) -> &StationTable {
        &self.table
    }

    pub fn run(&mut self, events: TraceEvents) -> Result<(), InvalidTrace> {
        for event in events.sorted_events {
            self.apply(event)?;
        }

        Ok(())
    }

    pub fn apply(&mut self, event: TraceEvent) -> Result<(), InvalidTrace> {
        let now = Instant::from_ticks(event.relative_time);
        let addr = event.station;
        match event.payload {
            TraceEventPayload::TxStatus(status) => {
                let Some(station) = self.table.get_mut(&addr) else {
                    // Frames may complete after their station is gone
                    tracing::debug!(peer = %addr, "dropping tx status for unknown station");
                    return Ok(());
                };

                let previous_lost_packets = station.loss().lost_packets();
                let verdict =
                    self.debouncer
                        .on_tx_status(station, &status, now, self.sink.as_ref());
                self.tracer
                    .track_tx_status(now, addr, previous_lost_packets, verdict);
            }
            TraceEventPayload::StationAdded(kind) => {
                self.add_station(now, StationSpec { addr, kind })?;
            }
            TraceEventPayload::StationRemoving => {
                if !self.table.begin_removal(&addr) {
                    return Err(InvalidTrace::MissingStation { addr });
                }
                self.tracer.track_station_removing(now, addr);
            }
            TraceEventPayload::StationRemoved => {
                if self.table.remove(&addr).is_none() {
                    return Err(InvalidTrace::MissingStation { addr });
                }
                self.tracer.track_station_removed(now, addr);
            }
        }

        Ok(())
    }

    fn add_station(&mut self, now: Instant, spec: StationSpec) -> Result<(), InvalidTrace> {
        if !self.table.insert(spec, now) {
            return Err(InvalidTrace::DuplicateStation {
                iface: self.table.iface().clone(),
                addr: spec.addr,
            });
        }

        self.tracer.track_station_added(now, spec.addr, spec.kind);
        Ok(())
    }
}
