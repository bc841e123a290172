use cqm_loss::MacAddr;
use cqm_loss::replay::{TraceEvent, TraceEventPayload};
use cqm_loss::station::spec::LinkKind;
use cqm_loss::tx_status::{TxOutcome, TxStatus};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use std::time::Duration;

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct TraceEventJson {
    relative_time_ms: u64,
    #[serde_as(as = "DisplayFromStr")]
    station: MacAddr,
    event: TraceEventPayloadJson,
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "camelCase", tag = "type")]
enum TraceEventPayloadJson {
    TxStatus {
        outcome: TxOutcome,
        /// Whether the frame was part of an aggregate without its own status
        #[serde(default)]
        aggregated_without_status: bool,
    },
    StationAdded {
        #[serde(default = "default_link_kind")]
        kind: LinkKind,
    },
    StationRemoving,
    StationRemoved,
}

fn default_link_kind() -> LinkKind {
    LinkKind::Ordinary
}

impl From<TraceEventJson> for TraceEvent {
    fn from(json: TraceEventJson) -> Self {
        let payload = match json.event {
            TraceEventPayloadJson::TxStatus {
                outcome,
                aggregated_without_status,
            } => TraceEventPayload::TxStatus(TxStatus {
                outcome,
                aggregated_without_status,
            }),
            TraceEventPayloadJson::StationAdded { kind } => TraceEventPayload::StationAdded(kind),
            TraceEventPayloadJson::StationRemoving => TraceEventPayload::StationRemoving,
            TraceEventPayloadJson::StationRemoved => TraceEventPayload::StationRemoved,
        };

        TraceEvent {
            relative_time: Duration::from_millis(json.relative_time_ms),
            station: json.station,
            payload,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STA_ADDR: MacAddr = MacAddr::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);

    fn parse(json: &str) -> TraceEvent {
        serde_json::from_str::<TraceEventJson>(json).unwrap().into()
    }

    #[test]
    fn test_parse_tx_status() {
        let event = parse(
            r#"{
                "relative_time_ms": 1500,
                "station": "02:00:00:00:00:01",
                "event": { "type": "txStatus", "outcome": "lost" }
            }"#,
        );

        assert_eq!(event.relative_time, Duration::from_millis(1_500));
        assert_eq!(event.station, STA_ADDR);
        assert!(
            matches!(event.payload, TraceEventPayload::TxStatus(status) if status == TxStatus::lost())
        );

        let event = parse(
            r#"{
                "relative_time_ms": 0,
                "station": "02:00:00:00:00:01",
                "event": { "type": "txStatus", "outcome": "lost", "aggregated_without_status": true }
            }"#,
        );
        let expected = TxStatus {
            outcome: TxOutcome::Lost,
            aggregated_without_status: true,
        };
        assert!(matches!(event.payload, TraceEventPayload::TxStatus(status) if status == expected));
    }

    #[test]
    fn test_parse_station_lifecycle() {
        let event = parse(
            r#"{
                "relative_time_ms": 10,
                "station": "02:00:00:00:00:01",
                "event": { "type": "stationAdded", "kind": "directPeerLink" }
            }"#,
        );
        assert!(matches!(
            event.payload,
            TraceEventPayload::StationAdded(LinkKind::DirectPeerLink)
        ));

        let event = parse(
            r#"{
                "relative_time_ms": 10,
                "station": "02:00:00:00:00:01",
                "event": { "type": "stationAdded" }
            }"#,
        );
        assert!(matches!(
            event.payload,
            TraceEventPayload::StationAdded(LinkKind::Ordinary)
        ));

        let event = parse(
            r#"{
                "relative_time_ms": 20,
                "station": "02:00:00:00:00:01",
                "event": { "type": "stationRemoving" }
            }"#,
        );
        assert!(matches!(event.payload, TraceEventPayload::StationRemoving));

        let event = parse(
            r#"{
                "relative_time_ms": 30,
                "station": "02:00:00:00:00:01",
                "event": { "type": "stationRemoved" }
            }"#,
        );
        assert!(matches!(event.payload, TraceEventPayload::StationRemoved));
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let json = r#"{
            "relative_time_ms": 0,
            "station": "02:00:00:00:00:01",
            "event": { "type": "beaconLost" }
        }"#;
        assert!(serde_json::from_str::<TraceEventJson>(json).is_err());
    }
}
