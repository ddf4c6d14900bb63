//! Error types for Mintgate

use thiserror::Error;

/// Core errors that can occur in Mintgate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Mint denied: {0}")]
    Denied(#[from] DenialReason),

    #[error("Transaction error: {0}")]
    Tx(#[from] TxError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// RPC transport and contract-read errors
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    #[error("RPC endpoint unreachable at {url}")]
    Unreachable { url: String },

    #[error("RPC request failed: {message}")]
    Rpc { message: String },

    #[error("Required contract field unavailable: {field}")]
    FieldUnavailable { field: &'static str },

    #[error("Failed to decode {field}: {message}")]
    Decode {
        field: &'static str,
        message: String,
    },

    #[error("No caller account configured (read-only client)")]
    NoCaller,
}

/// Business-rule denials: expected, user-facing, never retried automatically
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenialReason {
    #[error("Minting is paused")]
    Paused,

    #[error("No sale is currently active")]
    NoActiveSale,

    #[error("Insufficient supply: {remaining} tokens remaining")]
    InsufficientSupply { remaining: u64 },

    #[error("Wallet cap exceeded: limit is {cap} per wallet")]
    WalletCapExceeded { cap: u64 },

    #[error("Presale is active but no presale price is exposed")]
    PresaleMisconfigured,
}

/// Transaction submission errors
#[derive(Debug, Clone, Error)]
pub enum TxError {
    #[error("Mint value overflows 256 bits")]
    ValueOverflow,

    #[error("Submission rejected: {message}")]
    Rejected { message: String },

    #[error("Transaction submission failed: {message}")]
    SubmissionFailed { message: String },
}

/// Result type alias for Mintgate operations
pub type Result<T> = std::result::Result<T, Error>;

impl DenialReason {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Paused => "sale_paused",
            Self::NoActiveSale => "no_active_sale",
            Self::InsufficientSupply { .. } => "insufficient_supply",
            Self::WalletCapExceeded { .. } => "wallet_cap_exceeded",
            Self::PresaleMisconfigured => "presale_misconfigured",
        }
    }

    /// Get HTTP status code for this denial
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Paused | Self::NoActiveSale => 422,
            Self::InsufficientSupply { .. } | Self::WalletCapExceeded { .. } => 422,
            Self::PresaleMisconfigured => 503,
        }
    }
}
