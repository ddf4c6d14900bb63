//! eth-contract-client: Alloy-backed client for a single drop contract
//!
//! Wraps an HTTP provider (optionally wallet-backed) around `sol!` bindings
//! for the drop contract, with per-request timeouts and detection of which
//! optional extensions the contract exposes.

pub mod capabilities;

use std::future::IntoFuture;
use std::time::Duration;

use alloy::contract::Error as ContractError;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::transports::RpcError;
use async_trait::async_trait;
use mintgate_core::{Address, ChainError, RpcConfig, TxError, TxHash, U256};
use nft_drop::{EntryPoint, MintChain, MintPlan};

pub use capabilities::{detect_capabilities, ContractCapabilities, InterfaceTier};

/// Default timeout for RPC requests (30 seconds).
/// Long enough for congested endpoints, short enough to avoid perpetual spinners.
const RPC_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

sol! {
    #[sol(rpc)]
    contract DropContract {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function maxSupply() external view returns (uint256);
        function cost() external view returns (uint256);
        function presaleCost() external view returns (uint256);
        function publicSale() external view returns (bool);
        function paused() external view returns (bool);
        function maxMintPerWallet() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function isWhitelisted(address account) external view returns (bool);
        function mint(uint256 quantity) external payable;
        function preMint(uint256 quantity) external payable;
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ChainError>;

/// Drop contract client over an HTTP JSON-RPC provider.
///
/// With a private key configured the provider signs and submits locally;
/// without one the client is read-only and submissions are rejected.
#[derive(Clone)]
pub struct EthClient {
    contract: DropContract::DropContractInstance<DynProvider>,
    provider: DynProvider,
    caller: Option<Address>,
    config: RpcConfig,
}

impl EthClient {
    /// Connect to the RPC endpoint and bind the drop contract.
    pub async fn connect(config: RpcConfig, contract_address: Address) -> Result<Self> {
        let (provider, caller) = if config.private_key.is_empty() {
            let provider = ProviderBuilder::new()
                .connect(&config.url)
                .await
                .map_err(|e| ChainError::Unreachable {
                    url: format!("{}: {}", config.url, e),
                })?;
            (provider.erased(), None)
        } else {
            let signer: PrivateKeySigner =
                config
                    .private_key
                    .parse()
                    .map_err(|e| ChainError::Rpc {
                        message: format!("Invalid private key: {}", e),
                    })?;
            let caller = signer.address();
            let provider = ProviderBuilder::new()
                .wallet(signer)
                .connect(&config.url)
                .await
                .map_err(|e| ChainError::Unreachable {
                    url: format!("{}: {}", config.url, e),
                })?;
            (provider.erased(), Some(caller))
        };

        let contract = DropContract::new(contract_address, provider.clone());

        tracing::info!(
            url = %config.url,
            contract = %contract_address,
            signing = caller.is_some(),
            "Connected drop contract client"
        );

        Ok(Self {
            contract,
            provider,
            caller,
            config,
        })
    }

    /// Get the current client configuration
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// The bound contract address
    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    /// Chain id reported by the RPC endpoint
    pub async fn chain_id(&self) -> Result<u64> {
        tokio::time::timeout(RPC_REQUEST_TIMEOUT, self.provider.get_chain_id())
            .await
            .map_err(|_| timeout_error("eth_chainId"))?
            .map_err(|e| ChainError::Unreachable {
                url: format!("{}: {}", self.config.url, e),
            })
    }

    /// Run an optional contract read: `Ok(None)` when the contract does not
    /// expose the field, `Err` on genuine transport failures.
    async fn optional_read<T>(
        &self,
        field: &'static str,
        call: impl IntoFuture<Output = std::result::Result<T, ContractError>, IntoFuture: Send> + Send,
    ) -> Result<Option<T>> {
        match tokio::time::timeout(RPC_REQUEST_TIMEOUT, call.into_future()).await {
            Err(_) => Err(timeout_error(field)),
            Ok(Ok(value)) => Ok(Some(value)),
            Ok(Err(e)) if read_unavailable(&e) => {
                tracing::debug!(field, "Optional contract read unavailable: {}", e);
                Ok(None)
            }
            Ok(Err(e)) => Err(ChainError::Rpc {
                message: format!("{}: {}", field, e),
            }),
        }
    }

    /// Run a required contract read: an unavailable field is an error here.
    async fn required_read<T>(
        &self,
        field: &'static str,
        call: impl IntoFuture<Output = std::result::Result<T, ContractError>, IntoFuture: Send> + Send,
    ) -> Result<T> {
        self.optional_read(field, call)
            .await?
            .ok_or(ChainError::FieldUnavailable { field })
    }
}

#[async_trait]
impl MintChain for EthClient {
    fn caller(&self) -> Option<Address> {
        self.caller
    }

    async fn total_supply(&self) -> Result<u64> {
        let value = self
            .required_read("totalSupply", self.contract.totalSupply().call())
            .await?;
        to_u64("totalSupply", value)
    }

    async fn max_supply(&self) -> Result<u64> {
        let value = self
            .required_read("maxSupply", self.contract.maxSupply().call())
            .await?;
        to_u64("maxSupply", value)
    }

    async fn public_sale_price(&self) -> Result<U256> {
        self.required_read("cost", self.contract.cost().call()).await
    }

    async fn presale_price(&self) -> Result<Option<U256>> {
        self.optional_read("presaleCost", self.contract.presaleCost().call())
            .await
    }

    async fn public_sale_active(&self) -> Result<bool> {
        self.required_read("publicSale", self.contract.publicSale().call())
            .await
    }

    async fn paused(&self) -> Result<Option<bool>> {
        self.optional_read("paused", self.contract.paused().call())
            .await
    }

    async fn max_per_wallet(&self) -> Result<Option<u64>> {
        match self
            .optional_read("maxMintPerWallet", self.contract.maxMintPerWallet().call())
            .await?
        {
            Some(value) => {
                let cap = to_u64("maxMintPerWallet", value)?;
                // A zero cap means the contract enforces none
                Ok((cap > 0).then_some(cap))
            }
            None => Ok(None),
        }
    }

    async fn balance_of(&self, owner: Address) -> Result<u64> {
        let value = self
            .required_read("balanceOf", self.contract.balanceOf(owner).call())
            .await?;
        to_u64("balanceOf", value)
    }

    async fn presale_access(&self, account: Address) -> Result<Option<bool>> {
        self.optional_read("isWhitelisted", self.contract.isWhitelisted(account).call())
            .await
    }

    async fn collection_name(&self) -> Option<String> {
        self.optional_read("name", self.contract.name().call())
            .await
            .ok()
            .flatten()
    }

    async fn collection_symbol(&self) -> Option<String> {
        self.optional_read("symbol", self.contract.symbol().call())
            .await
            .ok()
            .flatten()
    }

    async fn submit(&self, plan: &MintPlan) -> std::result::Result<TxHash, TxError> {
        if self.caller.is_none() {
            return Err(TxError::SubmissionFailed {
                message: "No signing account configured".to_string(),
            });
        }

        let quantity = U256::from(plan.quantity);
        let sent = tokio::time::timeout(RPC_REQUEST_TIMEOUT, async {
            match plan.entry_point {
                EntryPoint::Mint => self.contract.mint(quantity).value(plan.value).send().await,
                EntryPoint::PreMint => {
                    self.contract.preMint(quantity).value(plan.value).send().await
                }
            }
        })
        .await
        .map_err(|_| TxError::SubmissionFailed {
            message: format!(
                "Submission timed out after {}s",
                RPC_REQUEST_TIMEOUT.as_secs()
            ),
        })?
        .map_err(map_submit_error)?;

        Ok(*sent.tx_hash())
    }
}

/// Classify a contract call error as "field not offered" vs a real failure.
fn read_unavailable(error: &ContractError) -> bool {
    match error {
        // Empty returndata: the function does not exist on this contract
        ContractError::ZeroData(..) => true,
        // The selector exists but not with the expected shape
        ContractError::AbiError(_) => true,
        // The node executed the call and the contract rejected it
        ContractError::TransportError(RpcError::ErrorResp(_)) => true,
        _ => false,
    }
}

fn map_submit_error(error: ContractError) -> TxError {
    if let ContractError::TransportError(RpcError::ErrorResp(payload)) = &error {
        // EIP-1193 user rejection surfaces as code 4001 from wallet-backed RPCs
        if payload.code == 4001 {
            return TxError::Rejected {
                message: payload.message.to_string(),
            };
        }
    }
    TxError::SubmissionFailed {
        message: error.to_string(),
    }
}

fn timeout_error(field: &str) -> ChainError {
    ChainError::Rpc {
        message: format!(
            "RPC request timed out after {}s ({})",
            RPC_REQUEST_TIMEOUT.as_secs(),
            field
        ),
    }
}

fn to_u64(field: &'static str, value: U256) -> Result<u64> {
    value.try_into().map_err(|_| ChainError::Decode {
        field,
        message: "value does not fit in u64".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u64() {
        assert_eq!(to_u64("totalSupply", U256::from(2222u64)).unwrap(), 2222);

        let too_big = U256::from(u64::MAX) + U256::from(1u64);
        let result = to_u64("totalSupply", too_big);
        assert!(matches!(
            result,
            Err(ChainError::Decode {
                field: "totalSupply",
                ..
            })
        ));
    }

    #[test]
    fn test_timeout_error_names_the_field() {
        let error = timeout_error("maxSupply");
        assert!(error.to_string().contains("maxSupply"));
    }
}
