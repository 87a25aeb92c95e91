use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    pub url: String,
}

/// Contents of the secrets file: one deployer key shared across the
/// configured networks. There is no default network, the caller names one.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub key: String,
    pub networks: BTreeMap<String, Network>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read secrets file {}: {e}", path.display()))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn network(&self, name: &str) -> Result<&Network> {
        self.networks
            .get(name)
            .ok_or_else(|| anyhow!("network {name} is not configured"))
    }
}
