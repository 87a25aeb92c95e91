use std::{fs, path::Path};

use anyhow::{anyhow, Result};
use ethers::types::H160;
use serde::{Deserialize, Serialize};

/// Addresses recorded on disk after each command, so later commands can
/// default to them instead of taking every address on the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployments {
    pub proxy: Option<H160>,
    pub implementation: Option<H160>,
    pub proxy_admin: Option<H160>,
    pub pending_implementation: Option<H160>,
}

impl Deployments {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read deployments file {}: {e}", path.display()))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)
            .map_err(|e| anyhow!("cannot write deployments file {}: {e}", path.display()))
    }

    pub fn require_proxy(&self) -> Result<H160> {
        self.proxy
            .ok_or_else(|| anyhow!("no proxy address recorded, pass --proxy"))
    }

    pub fn require_proxy_admin(&self) -> Result<H160> {
        self.proxy_admin
            .ok_or_else(|| anyhow!("no proxy admin address recorded, pass --proxy-admin"))
    }
}
