//! Acceptance tests for the Ftb token, run against an already running devnet node.

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Tests};
use ftb_contracts::utils::setup_client;
use tests::{test_proxy_decimals, test_total_supply, test_transfer_burn};

mod cli;
mod constants;
mod tests;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let Cli {
        test,
        artifacts,
        priv_key,
        rpc_url,
    } = Cli::parse();

    let client = setup_client(&rpc_url, &priv_key).await?;

    match test {
        Tests::TotalSupply => test_total_supply(client, &artifacts).await?,
        Tests::TransferBurn => test_transfer_burn(client, &artifacts).await?,
        Tests::ProxyDecimals => test_proxy_decimals(client, &artifacts).await?,
        Tests::All => {
            test_total_supply(client.clone(), &artifacts).await?;
            test_transfer_burn(client.clone(), &artifacts).await?;
            test_proxy_decimals(client, &artifacts).await?;
        }
    }

    println!("ok");
    Ok(())
}
