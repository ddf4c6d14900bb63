//! Application state shared across API handlers

use std::sync::Arc;

use eth_contract_client::EthClient;
use mintgate_core::{AppConfig, Error};
use nft_drop::MintOrchestrator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    chain: EthClient,
    session: MintOrchestrator<EthClient>,
}

impl AppState {
    /// Connect the chain client and build the shared state.
    pub async fn connect(config: AppConfig) -> Result<Self, Error> {
        config.drop.validate()?;
        let contract = config.drop.contract_address()?;

        tracing::info!(
            url = %config.rpc.url,
            contract = %contract,
            "Connecting chain client"
        );
        let chain = EthClient::connect(config.rpc.clone(), contract).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                session: MintOrchestrator::new(chain.clone()),
                chain,
                config,
            }),
        })
    }

    /// Application configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// The chain client (for reads and probing)
    pub fn chain(&self) -> &EthClient {
        &self.inner.chain
    }

    /// The session's mint orchestrator
    pub fn session(&self) -> &MintOrchestrator<EthClient> {
        &self.inner.session
    }
}
