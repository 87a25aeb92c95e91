use std::{path::Path, sync::Arc};

use anyhow::Result;
use ethers::abi::{AbiEncode, Token};
use ftb_contracts::{
    artifact::{Artifact, PROXY_ADMIN_ARTIFACT, PROXY_ARTIFACT, TOKEN_ARTIFACT},
    contracts::{for_the_boys_contract::InitializeCall, ForTheBoysContract},
    utils::Client,
};

/// Deploys the bare implementation and initializes it directly, without a
/// proxy in front.
pub(crate) async fn deploy_token_implementation(
    client: Arc<Client>,
    artifacts: &Path,
) -> Result<ForTheBoysContract<Client>> {
    let contract = Artifact::load(artifacts, TOKEN_ARTIFACT)?
        .factory(client.clone())
        .deploy(())?
        .legacy()
        .send()
        .await?;

    log::info!("test implementation at:{:?}", contract.address());

    let token = ForTheBoysContract::new(contract.address(), client);
    token.initialize().legacy().send().await?.await?;
    Ok(token)
}

/// Deploys the implementation behind a proxy admin and transparent proxy,
/// initializing through the proxy constructor calldata.
pub(crate) async fn deploy_token_proxy(
    client: Arc<Client>,
    artifacts: &Path,
) -> Result<ForTheBoysContract<Client>> {
    let implementation = Artifact::load(artifacts, TOKEN_ARTIFACT)?
        .factory(client.clone())
        .deploy(())?
        .legacy()
        .send()
        .await?;

    let proxy_admin = Artifact::load(artifacts, PROXY_ADMIN_ARTIFACT)?
        .factory(client.clone())
        .deploy(())?
        .legacy()
        .send()
        .await?;

    let proxy = Artifact::load(artifacts, PROXY_ARTIFACT)?
        .factory(client.clone())
        .deploy(vec![
            Token::Address(implementation.address()),
            Token::Address(proxy_admin.address()),
            Token::Bytes(InitializeCall {}.encode()),
        ])?
        .legacy()
        .send()
        .await?;
    log::info!("test proxy at:{:?}", proxy.address());

    Ok(ForTheBoysContract::new(proxy.address(), client))
}
