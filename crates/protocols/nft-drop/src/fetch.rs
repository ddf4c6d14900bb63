//! Snapshot and collection-info fetching
//!
//! Aggregates the per-field chain reads into the value objects the engine
//! and the display layer consume.

use mintgate_core::{Address, ChainError, DropConfig, U256};

use crate::chain::MintChain;
use crate::state::{CollectionInfo, DropSnapshot};

/// Take a fresh snapshot of the contract state for `caller`.
///
/// Required fields propagate their read errors. Optional fields stay `None`
/// when the contract does not expose them, with two explicit mappings:
/// a contract without a pause switch is not paused, and a contract without
/// an allowlist query grants no presale access.
pub async fn fetch_snapshot<C: MintChain + ?Sized>(
    chain: &C,
    caller: Address,
) -> Result<DropSnapshot, ChainError> {
    let total_supply = chain.total_supply().await?;
    let max_supply = chain.max_supply().await?;
    let public_sale_price = chain.public_sale_price().await?;
    let presale_price = chain.presale_price().await?;
    let public_sale_active = chain.public_sale_active().await?;
    let paused = chain.paused().await?.unwrap_or(false);
    let max_per_wallet = chain.max_per_wallet().await?;
    let caller_balance = chain.balance_of(caller).await?;
    let caller_has_presale_access = chain.presale_access(caller).await?.unwrap_or(false);

    Ok(DropSnapshot {
        caller,
        total_supply,
        max_supply,
        public_sale_price,
        presale_price,
        public_sale_active,
        caller_has_presale_access,
        paused,
        max_per_wallet,
        caller_balance,
    })
}

/// Build the collection overview for display.
///
/// Never fails: each unavailable read falls back to the configured default.
/// This aggregate is for rendering only — eligibility always goes through
/// [`fetch_snapshot`], which has no fallbacks.
pub async fn fetch_collection_info<C: MintChain + ?Sized>(
    chain: &C,
    config: &DropConfig,
) -> CollectionInfo {
    let name = chain
        .collection_name()
        .await
        .unwrap_or_else(|| config.name.clone());
    let symbol = chain
        .collection_symbol()
        .await
        .unwrap_or_else(|| config.symbol.clone());

    let total_supply = match chain.total_supply().await {
        Ok(supply) => supply,
        Err(e) => {
            tracing::warn!("totalSupply read failed, displaying 0: {}", e);
            0
        }
    };
    let max_supply = match chain.max_supply().await {
        Ok(supply) => supply,
        Err(e) => {
            tracing::warn!(
                "maxSupply read failed, falling back to configured {}: {}",
                config.max_supply,
                e
            );
            config.max_supply
        }
    };
    let price_wei = match chain.public_sale_price().await {
        Ok(price) => price,
        Err(e) => {
            tracing::warn!("cost read failed, falling back to configured price: {}", e);
            config.fallback_price().unwrap_or(U256::ZERO)
        }
    };
    let public_sale_active = chain.public_sale_active().await.unwrap_or(false);

    CollectionInfo {
        name,
        symbol,
        description: config.description.clone(),
        image: config.image.clone(),
        total_supply,
        max_supply,
        remaining: max_supply.saturating_sub(total_supply),
        price_wei,
        public_sale_active,
        minted_pct: CollectionInfo::minted_pct(total_supply, max_supply),
    }
}
