use std::{str::FromStr, sync::Arc};

use anyhow::Result;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{H160, H256},
    utils::hex,
};

pub type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

// Storage slots fixed by https://eips.ethereum.org/EIPS/eip-1967
pub const IMPLEMENTATION_SLOT: &str =
    "0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc";
pub const ADMIN_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

pub async fn setup_client(rpc: &str, key: &str) -> Result<Arc<Client>> {
    let wallet = LocalWallet::from_bytes(&hex::decode(key.strip_prefix("0x").unwrap_or(key))?)?;
    let provider = Provider::<Http>::try_from(rpc)?;

    let client = Arc::new(SignerMiddleware::new(
        provider.clone(),
        wallet.with_chain_id(provider.get_chainid().await?.as_u64()),
    ));
    Ok(client)
}

pub async fn read_address_slot(client: Arc<Client>, contract: H160, slot: &str) -> Result<H160> {
    let word = client
        .get_storage_at(contract, H256::from_str(slot)?, None)
        .await?;
    Ok(address_from_word(word))
}

pub fn address_from_word(word: H256) -> H160 {
    H160::from_slice(&word.as_bytes()[12..])
}

#[cfg(test)]
mod tests {
    use ethers::{types::U256, utils::keccak256};

    use super::*;

    fn derived_slot(label: &str) -> H256 {
        let mut slot = [0u8; 32];
        (U256::from_big_endian(&keccak256(label)) - 1).to_big_endian(&mut slot);
        H256(slot)
    }

    #[test]
    fn eip1967_slots_match_their_labels() {
        assert_eq!(
            derived_slot("eip1967.proxy.implementation"),
            H256::from_str(IMPLEMENTATION_SLOT).unwrap()
        );
        assert_eq!(
            derived_slot("eip1967.proxy.admin"),
            H256::from_str(ADMIN_SLOT).unwrap()
        );
    }

    #[test]
    fn address_sits_in_the_low_bytes_of_the_word() {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&[0x11; 20]);
        assert_eq!(address_from_word(H256(word)), H160::from_slice(&[0x11; 20]));
    }
}
