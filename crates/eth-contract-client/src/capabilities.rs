//! Contract capability detection
//!
//! Probes which parts of the drop surface the configured contract exposes
//! and classifies the result.

use mintgate_core::Address;
use nft_drop::MintChain;
use serde::{Deserialize, Serialize};

use crate::EthClient;

/// Capability tier based on probed contract surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum InterfaceTier {
    /// Core mint surface plus every optional extension
    Full,
    /// Core mint surface present, some extensions missing
    Partial,
    /// Plain ERC-721 without the mint surface — the engine cannot run
    Basic,
}

impl InterfaceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Partial => "Partial",
            Self::Basic => "Basic",
        }
    }

    /// Classify a probe result.
    pub fn classify(has_mint_surface: bool, extensions: &[bool]) -> Self {
        if !has_mint_surface {
            Self::Basic
        } else if extensions.iter().all(|present| *present) {
            Self::Full
        } else {
            Self::Partial
        }
    }
}

/// Contract capabilities detected through probing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractCapabilities {
    /// RPC endpoint is reachable and responding
    pub is_reachable: bool,

    /// Chain id reported by the endpoint
    pub chain_id: Option<u64>,

    /// Core mint reads respond (totalSupply, maxSupply, cost, publicSale)
    pub has_mint_surface: bool,

    /// Contract exposes a presale price
    pub has_presale_price: bool,

    /// Contract exposes a pause switch
    pub has_pause_flag: bool,

    /// Contract enforces a per-wallet cap
    pub has_wallet_cap: bool,

    /// Contract exposes an allowlist query
    pub has_allowlist: bool,

    /// Capability tier
    pub tier: InterfaceTier,
}

impl ContractCapabilities {
    /// Whether the presale mint path can work at all on this contract.
    pub fn supports_presale_path(&self) -> bool {
        self.has_presale_price && self.has_allowlist
    }

    /// Capabilities of an unreachable endpoint.
    pub fn offline() -> Self {
        Self {
            is_reachable: false,
            chain_id: None,
            has_mint_surface: false,
            has_presale_price: false,
            has_pause_flag: false,
            has_wallet_cap: false,
            has_allowlist: false,
            tier: InterfaceTier::Basic,
        }
    }
}

/// Detect contract capabilities by probing the mint surface.
pub async fn detect_capabilities(client: &EthClient) -> ContractCapabilities {
    let chain_id = match client.chain_id().await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Capability probe: endpoint unreachable: {}", e);
            return ContractCapabilities::offline();
        }
    };

    let has_total_supply = client.total_supply().await.is_ok();
    let has_max_supply = client.max_supply().await.is_ok();
    let has_price = client.public_sale_price().await.is_ok();
    let has_sale_flag = client.public_sale_active().await.is_ok();
    let has_mint_surface = has_total_supply && has_max_supply && has_price && has_sale_flag;

    let has_presale_price = matches!(client.presale_price().await, Ok(Some(_)));
    let has_pause_flag = matches!(client.paused().await, Ok(Some(_)));
    let has_wallet_cap = matches!(client.max_per_wallet().await, Ok(Some(_)));
    // Probe the allowlist with the zero address; only existence matters here
    let has_allowlist = matches!(client.presale_access(Address::ZERO).await, Ok(Some(_)));

    let tier = InterfaceTier::classify(
        has_mint_surface,
        &[has_presale_price, has_pause_flag, has_wallet_cap, has_allowlist],
    );

    tracing::info!(
        chain_id,
        tier = tier.as_str(),
        "Contract capability probe complete"
    );

    ContractCapabilities {
        is_reachable: true,
        chain_id: Some(chain_id),
        has_mint_surface,
        has_presale_price,
        has_pause_flag,
        has_wallet_cap,
        has_allowlist,
        tier,
    }
}
