use cqm_loss::MacAddr;
use cqm_loss::replay::ReplaySpec;
use cqm_loss::station::spec::{LinkKind, StationSpec};
use cqm_loss::tx_status::HwFlags;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

#[derive(Deserialize, Clone)]
pub struct StationConfigJson {
    interface: String,
    #[serde(default)]
    driver: HwFlags,
    stations: Vec<StationJson>,
}

#[serde_as]
#[derive(Deserialize, Clone)]
struct StationJson {
    #[serde_as(as = "DisplayFromStr")]
    address: MacAddr,
    #[serde(default = "default_link_kind")]
    kind: LinkKind,
}

fn default_link_kind() -> LinkKind {
    LinkKind::Ordinary
}

impl StationConfigJson {
    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn driver(&self) -> HwFlags {
        self.driver
    }

    pub fn contains(&self, addr: MacAddr) -> bool {
        self.stations.iter().any(|s| s.address == addr)
    }
}

impl From<StationConfigJson> for ReplaySpec {
    fn from(json: StationConfigJson) -> Self {
        ReplaySpec {
            iface: json.interface.into_boxed_str().into(),
            hw: json.driver,
            stations: json
                .stations
                .into_iter()
                .map(|s| StationSpec {
                    addr: s.address,
                    kind: s.kind,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STA_ADDR: MacAddr = MacAddr::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
    const TDLS_ADDR: MacAddr = MacAddr::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x02]);

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "interface": "wlan1",
            "driver": { "reports_tx_ack_status": false, "reports_low_ack": true },
            "stations": [
                { "address": "02:00:00:00:00:01", "kind": "ordinary" },
                { "address": "02:00:00:00:00:02", "kind": "directPeerLink" }
            ]
        }"#;
        let config: StationConfigJson = serde_json::from_str(json).unwrap();

        assert_eq!(config.interface(), "wlan1");
        assert_eq!(
            config.driver(),
            HwFlags {
                reports_tx_ack_status: false,
                reports_low_ack: true,
            }
        );
        assert!(config.contains(STA_ADDR));
        assert!(config.contains(TDLS_ADDR));

        let spec: ReplaySpec = config.into();
        assert_eq!(&*spec.iface, "wlan1");
        let stations: Vec<_> = spec.stations.iter().map(|s| (s.addr, s.kind)).collect();
        assert_eq!(
            stations,
            vec![
                (STA_ADDR, LinkKind::Ordinary),
                (TDLS_ADDR, LinkKind::DirectPeerLink)
            ]
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{
            "interface": "wlan0",
            "stations": [{ "address": "02:00:00:00:00:01" }]
        }"#;
        let config: StationConfigJson = serde_json::from_str(json).unwrap();

        assert_eq!(config.driver(), HwFlags::default());
        let spec: ReplaySpec = config.into();
        assert_eq!(spec.stations[0].kind, LinkKind::Ordinary);
    }

    #[test]
    fn test_partial_driver_keeps_ack_status_reporting() {
        let json = r#"{
            "interface": "wlan0",
            "driver": { "reports_low_ack": true },
            "stations": []
        }"#;
        let config: StationConfigJson = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.driver(),
            HwFlags {
                reports_tx_ack_status: true,
                reports_low_ack: true,
            }
        );
        assert!(!config.contains(STA_ADDR));
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let json = r#"{
            "interface": "wlan0",
            "stations": [{ "address": "02:00:00:00:00" }]
        }"#;
        assert!(serde_json::from_str::<StationConfigJson>(json).is_err());
    }
}
