//! Core type definitions for Mintgate

use serde::{Deserialize, Serialize};
use std::fmt;

pub use alloy_primitives::{Address, TxHash, U256};

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Sepolia,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
        }
    }

    /// EIP-155 chain id for this network
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Sepolia => 11_155_111,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Constants
pub mod constants {
    /// 1 ETH in wei
    pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;
}

/// Format a wei amount as an ETH display string with 4 decimals.
///
/// Display only — engine arithmetic never goes through floats.
pub fn format_eth(wei: U256) -> String {
    let eth = wei.to_string().parse::<f64>().unwrap_or(0.0) / constants::WEI_PER_ETH as f64;
    format!("{:.4} ETH", eth)
}

/// Shorten an address for display: `0x1234...abcd`
pub fn short_address(address: &Address) -> String {
    let s = address.to_string();
    format!("{}...{}", &s[..6], &s[s.len() - 4..])
}
