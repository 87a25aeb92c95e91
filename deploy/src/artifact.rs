use std::{fs, path::Path, sync::Arc};

use anyhow::{anyhow, Result};
use ethers::{abi::Abi, contract::ContractFactory, types::Bytes};
use serde::Deserialize;

use crate::utils::Client;

pub const TOKEN_ARTIFACT: &str = "ForTheBoysContract.json";
pub const PROXY_ADMIN_ARTIFACT: &str = "ProxyAdmin.json";
pub const PROXY_ARTIFACT: &str = "TransparentUpgradeableProxy.json";

/// A hardhat-format build artifact. The Solidity sources are compiled
/// outside this repository, the scripts only consume their artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn load(dir: &Path, file: &str) -> Result<Self> {
        let path = dir.join(file);
        let raw = fs::read_to_string(&path)
            .map_err(|e| anyhow!("cannot read artifact {}: {e}", path.display()))?;
        let artifact: Artifact = serde_json::from_str(&raw)?;
        if artifact.bytecode.is_empty() {
            return Err(anyhow!(
                "artifact {} carries no bytecode",
                artifact.contract_name
            ));
        }
        Ok(artifact)
    }

    pub fn factory(&self, client: Arc<Client>) -> ContractFactory<Client> {
        ContractFactory::new(self.abi.clone(), self.bytecode.clone(), client)
    }
}
