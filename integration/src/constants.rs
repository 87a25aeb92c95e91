//! Constants shared by the acceptance tests.

/// Default RPC endpoint of a locally running devnet node
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// Account 0 of the stock hardhat/anvil devnet
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Number of decimals the token reports
pub(crate) const TOKEN_DECIMALS: u8 = 18;

/// Whole tokens minted to the minter on initialization, 10^12
pub(crate) const INITIAL_SUPPLY_WHOLE_TOKENS: u64 = 1_000_000_000_000;

/// Percentage of every transfer amount that is burned
pub(crate) const BURN_RATE_PERCENT: u64 = 5;

/// Transfer amount used by the burn test, in base units
pub(crate) const TRADE_AMOUNT: u64 = 924;
