use crate::config::stations::StationConfigJson;
use crate::config::trace::TraceEventJson;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

pub mod cli;
pub mod stations;
pub mod trace;

pub fn load_stations(path: &Path) -> anyhow::Result<StationConfigJson> {
    load_json(path).context("failed to load station config")
}

pub fn load_trace(path: &Path) -> anyhow::Result<Vec<TraceEventJson>> {
    load_json(path).context("failed to load trace events")
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read `{}`", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("`{}` contains invalid JSON", path.display()))
}
