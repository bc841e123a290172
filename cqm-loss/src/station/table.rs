use crate::station::Station;
use crate::station::addr::MacAddr;
use crate::station::spec::StationSpec;
use crate::time::Instant;
use std::collections::HashMap;
use std::sync::Arc;

/// The stations associated to a single network interface
pub struct StationTable {
    iface: Arc<str>,
    stations: HashMap<MacAddr, Station>,
}

impl StationTable {
    pub fn new(iface: Arc<str>) -> Self {
        Self {
            iface,
            stations: HashMap::new(),
        }
    }

    pub fn iface(&self) -> &Arc<str> {
        &self.iface
    }

    /// Creates a zeroed station record, returning `false` if the address is already taken
    pub fn insert(&mut self, spec: StationSpec, now: Instant) -> bool {
        if self.stations.contains_key(&spec.addr) {
            return false;
        }

        self.stations.insert(spec.addr, Station::new(spec, now));
        true
    }

    pub fn get(&self, addr: &MacAddr) -> Option<&Station> {
        self.stations.get(addr)
    }

    pub fn get_mut(&mut self, addr: &MacAddr) -> Option<&mut Station> {
        self.stations.get_mut(addr)
    }

    pub fn begin_removal(&mut self, addr: &MacAddr) -> bool {
        match self.stations.get_mut(addr) {
            Some(station) => {
                station.begin_removal();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, addr: &MacAddr) -> Option<Station> {
        self.stations.remove(addr)
    }
}
