//! Drop state types
//!
//! The per-attempt chain snapshot the evaluator works from, and the
//! display-oriented collection aggregate with configured fallbacks.

use mintgate_core::{Address, U256};
use serde::{Deserialize, Serialize};

/// Hard upper bound on a single mint request, independent of contract caps.
pub const MAX_REQUEST_QUANTITY: u64 = 20;

/// A consistent read of the contract state relevant to minting, taken for one
/// caller at one point in time.
///
/// Constructed fresh before every eligibility check and discarded after the
/// attempt: price and supply can move between read and submit, so snapshots
/// are never cached across attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSnapshot {
    /// The account this snapshot was taken for
    pub caller: Address,
    pub total_supply: u64,
    pub max_supply: u64,
    /// Public sale price per token (wei)
    pub public_sale_price: U256,
    /// Presale price per token (wei); `None` when the contract offers none
    pub presale_price: Option<U256>,
    pub public_sale_active: bool,
    pub caller_has_presale_access: bool,
    pub paused: bool,
    /// Per-wallet cap; `None` when the contract enforces none
    pub max_per_wallet: Option<u64>,
    /// Tokens the caller already holds
    pub caller_balance: u64,
}

impl DropSnapshot {
    /// Tokens still mintable before the supply cap.
    pub fn remaining(&self) -> u64 {
        self.max_supply.saturating_sub(self.total_supply)
    }

    /// Tokens the caller may still mint under the per-wallet cap, if any.
    pub fn wallet_headroom(&self) -> Option<u64> {
        self.max_per_wallet
            .map(|cap| cap.saturating_sub(self.caller_balance))
    }
}

/// Clamp a requested quantity to what could possibly succeed: the remaining
/// supply, the caller's per-wallet headroom, and the request hard cap.
/// Never returns 0 — a quantity of at least 1 keeps the request well-formed
/// and lets the evaluator report the real denial reason.
pub fn clamp_quantity(requested: u64, remaining: u64, wallet_headroom: Option<u64>) -> u64 {
    let mut max = MAX_REQUEST_QUANTITY.min(remaining);
    if let Some(headroom) = wallet_headroom {
        max = max.min(headroom);
    }
    requested.clamp(1, max.max(1))
}

/// Collection overview for display.
///
/// Every field falls back to the configured defaults when the corresponding
/// chain read is unavailable. Display only: the eligibility engine never
/// sees fallback values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: Option<String>,
    pub total_supply: u64,
    pub max_supply: u64,
    pub remaining: u64,
    /// Public sale price per token (wei)
    pub price_wei: U256,
    pub public_sale_active: bool,
    /// Minted share of max supply, in percent
    pub minted_pct: f64,
}

impl CollectionInfo {
    pub(crate) fn minted_pct(total_supply: u64, max_supply: u64) -> f64 {
        if max_supply == 0 {
            0.0
        } else {
            (total_supply as f64 / max_supply as f64) * 100.0
        }
    }
}
