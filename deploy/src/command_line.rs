use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use ethers::{
    types::{Bytes, H160},
    utils::hex,
};

use crate::{config::Config, deploy::Deploy, deployments::Deployments};

#[derive(Debug, Parser)]
pub struct CommandLine {
    /// Secrets file with the network urls and the deployer key
    #[clap(short, long, default_value = "secrets.json")]
    config: PathBuf,

    /// Named network from the secrets file
    #[clap(short, long)]
    network: String,

    /// Directory with the compiled contract artifacts
    #[clap(short, long, default_value = "artifacts")]
    artifacts: PathBuf,

    /// Deployments record for the selected network
    #[clap(short, long, default_value = "deployments.json")]
    deployments: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deploy the token implementation, the proxy admin, and the proxy
    Deploy,
    /// Deploy a new implementation for an existing proxy
    PrepareUpgrade(PrepareUpgradeArgs),
    /// Point the proxy at a prepared implementation
    Upgrade(UpgradeArgs),
    /// Hand the proxy admin over to a new owner
    TransferOwnership(TransferOwnershipArgs),
}

#[derive(Debug, Args)]
struct PrepareUpgradeArgs {
    /// Proxy address, defaults to the recorded one
    #[clap(short, long)]
    proxy: Option<H160>,
}

#[derive(Debug, Args)]
struct UpgradeArgs {
    /// Proxy address, defaults to the recorded one
    #[clap(short, long)]
    proxy: Option<H160>,

    /// Proxy admin address, defaults to the recorded one
    #[clap(long)]
    proxy_admin: Option<H160>,

    /// New implementation, defaults to the prepared one
    #[clap(short, long)]
    implementation: Option<H160>,

    /// Hex calldata for the implementation call made during the upgrade
    #[clap(long)]
    calldata: Option<String>,
}

#[derive(Debug, Args)]
struct TransferOwnershipArgs {
    /// Proxy admin address, defaults to the recorded one
    #[clap(long)]
    proxy_admin: Option<H160>,

    /// New proxy admin owner, e.g. a gnosis safe
    #[clap(long)]
    new_owner: H160,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load(&self.config)?;
        let network = config.network(&self.network)?;
        let deploy = Deploy::new(&network.url, &config.key).await?;
        let recorded = Deployments::load(&self.deployments)?;

        match self.command {
            Command::Deploy => deploy.deploy_proxy(&self.artifacts, &self.deployments).await,
            Command::PrepareUpgrade(args) => {
                let proxy = args
                    .proxy
                    .map(Ok)
                    .unwrap_or_else(|| recorded.require_proxy())?;
                deploy
                    .prepare_upgrade(proxy, &self.artifacts, &self.deployments)
                    .await
            }
            Command::Upgrade(args) => {
                let proxy = args
                    .proxy
                    .map(Ok)
                    .unwrap_or_else(|| recorded.require_proxy())?;
                let proxy_admin = args
                    .proxy_admin
                    .map(Ok)
                    .unwrap_or_else(|| recorded.require_proxy_admin())?;
                let implementation = args
                    .implementation
                    .or(recorded.pending_implementation)
                    .ok_or_else(|| anyhow!("no implementation prepared, pass --implementation"))?;
                let calldata = args.calldata.map(|data| decode_calldata(&data)).transpose()?;
                deploy
                    .upgrade(proxy_admin, proxy, implementation, calldata, &self.deployments)
                    .await
            }
            Command::TransferOwnership(args) => {
                let proxy_admin = args
                    .proxy_admin
                    .map(Ok)
                    .unwrap_or_else(|| recorded.require_proxy_admin())?;
                deploy.transfer_ownership(proxy_admin, args.new_owner).await
            }
        }
    }
}

fn decode_calldata(data: &str) -> Result<Bytes> {
    Ok(hex::decode(data.strip_prefix("0x").unwrap_or(data))?.into())
}
