//! Data Transfer Objects for API requests and responses

use mintgate_core::format_eth;
use nft_drop::{CollectionInfo, MintPhase};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Contract status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractStatusResponse {
    pub reachable: bool,
    pub contract: String,
    pub network: String,
    pub chain_id: Option<u64>,
    pub tier: String,
    pub has_mint_surface: bool,
    pub has_presale_price: bool,
    pub has_pause_flag: bool,
    pub has_wallet_cap: bool,
    pub has_allowlist: bool,
}

/// Collection overview response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: Option<String>,
    pub total_supply: u64,
    pub max_supply: u64,
    pub remaining: u64,
    /// Price per token in wei, as a decimal string
    pub price_wei: String,
    /// Human-readable price (e.g., "0.0125 ETH")
    pub price_display: String,
    pub public_sale_active: bool,
    pub minted_pct: f64,
}

impl From<CollectionInfo> for CollectionResponse {
    fn from(info: CollectionInfo) -> Self {
        Self {
            name: info.name,
            symbol: info.symbol,
            description: info.description,
            image: info.image,
            total_supply: info.total_supply,
            max_supply: info.max_supply,
            remaining: info.remaining,
            price_wei: info.price_wei.to_string(),
            price_display: format_eth(info.price_wei),
            public_sale_active: info.public_sale_active,
            minted_pct: info.minted_pct,
        }
    }
}

/// Mint preview request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintPreviewRequest {
    pub quantity: u64,
}

/// Mint preview response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintPreviewResponse {
    pub can_execute: bool,
    pub uses_presale: bool,
    /// Price per token in wei, as a decimal string
    pub price_per_unit_wei: String,
    /// Total value to send in wei, as a decimal string
    pub total_wei: String,
    pub error_code: Option<String>,
    pub error: Option<String>,
}

impl MintPreviewResponse {
    /// A preview that cannot execute, with the denial attached.
    pub fn denied(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            can_execute: false,
            uses_presale: false,
            price_per_unit_wei: "0".to_string(),
            total_wei: "0".to_string(),
            error_code: Some(code.into()),
            error: Some(message.into()),
        }
    }
}

/// Mint submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintRequest {
    pub quantity: u64,
}

/// Session status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// "idle" | "submitting" | "confirmed" | "failed"
    pub phase: String,
    pub tx_hash: Option<String>,
    pub error_code: Option<String>,
    pub error: Option<String>,
}

impl From<MintPhase> for SessionResponse {
    fn from(phase: MintPhase) -> Self {
        let name = phase.name().to_string();
        match phase {
            MintPhase::Idle | MintPhase::Submitting => Self {
                phase: name,
                tx_hash: None,
                error_code: None,
                error: None,
            },
            MintPhase::Confirmed { tx_hash } => Self {
                phase: name,
                tx_hash: Some(tx_hash.to_string()),
                error_code: None,
                error: None,
            },
            MintPhase::Failed { code, message } => Self {
                phase: name,
                tx_hash: None,
                error_code: Some(code),
                error: Some(message),
            },
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}
