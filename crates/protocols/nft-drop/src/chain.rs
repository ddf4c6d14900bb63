//! Chain capability interface
//!
//! The statically declared surface the mint engine needs from a contract:
//! one read per field the evaluator consumes, plus the two payable entry
//! points. Implementations live outside this crate (see eth-contract-client);
//! tests use a scripted in-memory chain.

use async_trait::async_trait;
use mintgate_core::{Address, ChainError, TxError, TxHash, U256};

use crate::plan::MintPlan;

/// Capability interface over the drop contract.
///
/// Required fields fail with a [`ChainError`] when they cannot be read.
/// Optional fields return `None` when the contract does not expose them —
/// "not offered" is never conflated with a zero default.
#[async_trait]
pub trait MintChain: Send + Sync {
    /// The account mints are evaluated and submitted for, if one is
    /// configured. `None` means the chain client is read-only.
    fn caller(&self) -> Option<Address>;

    async fn total_supply(&self) -> Result<u64, ChainError>;

    async fn max_supply(&self) -> Result<u64, ChainError>;

    /// Public sale price per token, in wei.
    async fn public_sale_price(&self) -> Result<U256, ChainError>;

    /// Presale price per token, in wei. `None` when the contract exposes no
    /// presale price.
    async fn presale_price(&self) -> Result<Option<U256>, ChainError>;

    async fn public_sale_active(&self) -> Result<bool, ChainError>;

    /// `None` when the contract has no pause switch.
    async fn paused(&self) -> Result<Option<bool>, ChainError>;

    /// Per-wallet mint cap. `None` when the contract enforces none.
    async fn max_per_wallet(&self) -> Result<Option<u64>, ChainError>;

    /// Number of tokens `owner` currently holds.
    async fn balance_of(&self, owner: Address) -> Result<u64, ChainError>;

    /// Whether `account` is on the presale allowlist. `None` when the
    /// contract exposes no allowlist query.
    async fn presale_access(&self, account: Address) -> Result<Option<bool>, ChainError>;

    /// Collection name, for display. `None` on any failure — display reads
    /// never block minting.
    async fn collection_name(&self) -> Option<String>;

    /// Collection symbol, for display.
    async fn collection_symbol(&self) -> Option<String>;

    /// Submit a mint plan as a payable call. Resolves with the transaction
    /// hash once the node has accepted the transaction; inclusion is not
    /// awaited here.
    async fn submit(&self, plan: &MintPlan) -> Result<TxHash, TxError>;
}
