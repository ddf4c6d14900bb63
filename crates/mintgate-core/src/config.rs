//! Configuration types for Mintgate

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Address, Error, Network, U256};

/// RPC endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// JSON-RPC URL (e.g., "http://127.0.0.1:8545")
    pub url: String,

    /// Hex-encoded private key for the minting account (optional).
    /// Without it the client is read-only and submissions are rejected.
    #[serde(default)]
    pub private_key: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8545".to_string(),
            private_key: String::new(),
        }
    }
}

/// Drop contract configuration.
///
/// Carries the contract address plus the display metadata and fallback values
/// used when a chain read is unavailable. Fallbacks are display-only: the
/// eligibility engine always works from fresh chain reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropConfig {
    /// ERC-721 contract address (0x-prefixed, 40 hex chars)
    pub address: String,

    /// Collection name fallback
    pub name: String,

    /// Collection symbol fallback
    pub symbol: String,

    /// Collection description (display only)
    #[serde(default)]
    pub description: String,

    /// Preview image reference (display only)
    #[serde(default)]
    pub image: Option<String>,

    /// Max supply fallback
    pub max_supply: u64,

    /// Price per token fallback, in wei, as a decimal string
    pub price_wei: String,

    /// Per-wallet mint cap fallback
    #[serde(default)]
    pub max_per_wallet: Option<u64>,
}

impl DropConfig {
    /// Parse the configured contract address.
    pub fn contract_address(&self) -> Result<Address, Error> {
        self.address
            .parse()
            .map_err(|_| Error::Config(format!("Invalid contract address: {}", self.address)))
    }

    /// Parse the fallback price into wei.
    pub fn fallback_price(&self) -> Result<U256, Error> {
        self.price_wei
            .parse()
            .map_err(|_| Error::Config(format!("Invalid price_wei: {}", self.price_wei)))
    }

    /// Validate address and price syntax. Deeper validation (is the address
    /// actually a drop contract) is the chain client's responsibility.
    pub fn validate(&self) -> Result<(), Error> {
        self.contract_address()?;
        self.fallback_price()?;
        Ok(())
    }
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            address: "0x0000000000000000000000000000000000000000".to_string(),
            name: "Mintgate Drop".to_string(),
            symbol: "DROP".to_string(),
            description: String::new(),
            image: None,
            max_supply: 0,
            price_wei: "0".to_string(),
            max_per_wallet: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// RPC connection settings
    pub rpc: RpcConfig,

    /// Network (mainnet or sepolia)
    pub network: Network,

    /// Drop contract settings
    pub drop: DropConfig,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    18545
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            network: Network::Mainnet,
            drop: DropConfig::default(),
            api_port: default_api_port(),
        }
    }
}

impl AppConfig {
    /// Load a single configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("Failed to parse config: {}", e)))?;
        config.drop.validate()?;
        Ok(config)
    }
}

/// Named deployment profiles.
///
/// One file holds every deployment variant; the active profile is selected at
/// startup instead of maintaining divergent per-deployment config copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Profile used when none is requested explicitly
    pub active: String,

    /// Profiles by name
    pub profiles: HashMap<String, AppConfig>,
}

impl DeployConfig {
    /// Load profiles from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("Failed to parse profiles: {}", e)))
    }

    /// Select a profile by name, falling back to the configured active one.
    pub fn select(&self, name: Option<&str>) -> Result<&AppConfig, Error> {
        let name = name.unwrap_or(&self.active);
        self.profiles
            .get(name)
            .ok_or_else(|| Error::Config(format!("Unknown profile: {}", name)))
    }
}
