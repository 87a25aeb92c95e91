use std::{path::Path, sync::Arc};

use anyhow::Result;
use ethers::{
    abi::{AbiEncode, Token},
    types::{Bytes, H160},
};

use crate::{
    artifact::{Artifact, PROXY_ADMIN_ARTIFACT, PROXY_ARTIFACT, TOKEN_ARTIFACT},
    contracts::{for_the_boys_contract::InitializeCall, ProxyAdmin},
    deployments::Deployments,
    utils::{read_address_slot, setup_client, Client, ADMIN_SLOT, IMPLEMENTATION_SLOT},
};

pub struct Deploy {
    client: Arc<Client>,
}

impl Deploy {
    pub async fn new(rpc: &str, key: &str) -> Result<Self> {
        Ok(Self {
            client: setup_client(rpc, key).await?,
        })
    }

    pub async fn deploy_proxy(&self, artifacts: &Path, deployments_path: &Path) -> Result<()> {
        println!("Deploying Ftb proxy, implementation, and proxy admin...");

        let implementation = self.deploy_implementation(artifacts).await?;
        println!("Ftb implementation address:{:?}", implementation);

        let proxy_admin = Artifact::load(artifacts, PROXY_ADMIN_ARTIFACT)?
            .factory(self.client.clone())
            .deploy(())?
            .legacy()
            .send()
            .await?
            .address();
        println!("proxy admin address:{:?}", proxy_admin);

        let proxy = Artifact::load(artifacts, PROXY_ARTIFACT)?
            .factory(self.client.clone())
            .deploy(vec![
                Token::Address(implementation),
                Token::Address(proxy_admin),
                Token::Bytes(InitializeCall {}.encode()),
            ])?
            .legacy()
            .send()
            .await?
            .address();
        println!("FtbProxy deployed to:{:?}", proxy);

        log::info!(
            "proxy implementation slot:{:?}",
            read_address_slot(self.client.clone(), proxy, IMPLEMENTATION_SLOT).await?
        );
        log::info!(
            "proxy admin slot:{:?}",
            read_address_slot(self.client.clone(), proxy, ADMIN_SLOT).await?
        );

        let mut recorded = Deployments::load(deployments_path)?;
        recorded.proxy = Some(proxy);
        recorded.implementation = Some(implementation);
        recorded.proxy_admin = Some(proxy_admin);
        recorded.save(deployments_path)
    }

    pub async fn prepare_upgrade(
        &self,
        proxy: H160,
        artifacts: &Path,
        deployments_path: &Path,
    ) -> Result<()> {
        println!("Preparing upgrade...");

        let current = read_address_slot(self.client.clone(), proxy, IMPLEMENTATION_SLOT).await?;
        log::info!("current implementation:{:?}", current);

        let implementation = self.deploy_implementation(artifacts).await?;
        println!("New Ftb implementation at:{:?}", implementation);

        let mut recorded = Deployments::load(deployments_path)?;
        recorded.pending_implementation = Some(implementation);
        recorded.save(deployments_path)
    }

    pub async fn upgrade(
        &self,
        proxy_admin: H160,
        proxy: H160,
        implementation: H160,
        calldata: Option<Bytes>,
        deployments_path: &Path,
    ) -> Result<()> {
        let admin = ProxyAdmin::new(proxy_admin, self.client.clone());
        match calldata {
            Some(data) => {
                admin
                    .upgrade_and_call(proxy, implementation, data)
                    .legacy()
                    .send()
                    .await?
                    .await?
            }
            None => {
                admin
                    .upgrade(proxy, implementation)
                    .legacy()
                    .send()
                    .await?
                    .await?
            }
        };

        let current = read_address_slot(self.client.clone(), proxy, IMPLEMENTATION_SLOT).await?;
        println!("proxy implementation now:{:?}", current);

        let mut recorded = Deployments::load(deployments_path)?;
        recorded.implementation = Some(implementation);
        if recorded.pending_implementation == Some(implementation) {
            recorded.pending_implementation = None;
        }
        recorded.save(deployments_path)
    }

    pub async fn transfer_ownership(&self, proxy_admin: H160, new_owner: H160) -> Result<()> {
        println!("Transferring ownership of ProxyAdmin...");

        let admin = ProxyAdmin::new(proxy_admin, self.client.clone());
        log::info!("current proxy admin owner:{:?}", admin.owner().call().await?);

        admin
            .transfer_ownership(new_owner)
            .legacy()
            .send()
            .await?
            .await?;
        println!("Transferred ownership of ProxyAdmin to:{:?}", new_owner);
        Ok(())
    }

    async fn deploy_implementation(&self, artifacts: &Path) -> Result<H160> {
        let contract = Artifact::load(artifacts, TOKEN_ARTIFACT)?
            .factory(self.client.clone())
            .deploy(())?
            .legacy()
            .send()
            .await?;
        Ok(contract.address())
    }
}
