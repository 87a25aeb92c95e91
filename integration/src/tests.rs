//! The acceptance test bodies.

use std::{path::Path, sync::Arc};

use anyhow::{ensure, Result};
use ethers::types::U256;
use ftb_contracts::utils::Client;

use crate::{
    constants::{BURN_RATE_PERCENT, INITIAL_SUPPLY_WHOLE_TOKENS, TOKEN_DECIMALS, TRADE_AMOUNT},
    utils::{deploy_token_implementation, deploy_token_proxy},
};

pub(crate) async fn test_total_supply(client: Arc<Client>, artifacts: &Path) -> Result<()> {
    let token = deploy_token_implementation(client, artifacts).await?;

    let minter = token.get_minter().call().await?;
    let supply = token.balance_of(minter).call().await?;
    ensure!(
        supply == initial_supply(),
        "minter balance {} does not match the initial supply {}",
        supply,
        initial_supply()
    );

    let reported = token.total_supply().call().await?;
    ensure!(
        reported == initial_supply(),
        "totalSupply reports {} right after initialization",
        reported
    );
    Ok(())
}

pub(crate) async fn test_transfer_burn(client: Arc<Client>, artifacts: &Path) -> Result<()> {
    let token = deploy_token_implementation(client, artifacts).await?;
    let minter = token.get_minter().call().await?;

    // The minter doubles as the liquidity pool, so only the burn applies.
    let amount = U256::from(TRADE_AMOUNT);
    token.transfer(minter, amount).legacy().send().await?.await?;

    let balance = token.balance_of(minter).call().await?;
    let expected = initial_supply() - burned(amount);
    ensure!(
        balance == expected,
        "minter balance {} after the transfer, expected {}",
        balance,
        expected
    );
    Ok(())
}

pub(crate) async fn test_proxy_decimals(client: Arc<Client>, artifacts: &Path) -> Result<()> {
    let token = deploy_token_proxy(client, artifacts).await?;

    let decimals = token.decimals().call().await?;
    ensure!(
        decimals == TOKEN_DECIMALS,
        "token reports {} decimals through the proxy",
        decimals
    );
    Ok(())
}

fn initial_supply() -> U256 {
    U256::from(INITIAL_SUPPLY_WHOLE_TOKENS) * U256::exp10(TOKEN_DECIMALS as usize)
}

fn burned(amount: U256) -> U256 {
    amount * U256::from(BURN_RATE_PERCENT) / U256::from(100u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_supply_is_a_trillion_tokens_at_18_decimals() {
        assert_eq!(
            initial_supply().to_string(),
            "1000000000000000000000000000000"
        );
    }

    #[test]
    fn burn_leaves_the_documented_minter_balance() {
        assert_eq!(burned(U256::from(TRADE_AMOUNT)), U256::from(46));
        assert_eq!(
            (initial_supply() - burned(U256::from(TRADE_AMOUNT))).to_string(),
            "999999999999999999999999999954"
        );
    }
}
