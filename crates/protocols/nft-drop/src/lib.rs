//! ERC-721 drop mint engine
//!
//! This crate implements the decision core of a drop mint: reconciling
//! on-chain sale state into a go/no-go verdict and selecting which payable
//! entry point to invoke with which value.
//!
//! # Flow
//!
//! `request_mint(quantity)` → fresh [`DropSnapshot`] → [`evaluate`] →
//! denied: surface the reason / allowed: [`build_plan`] → submit through the
//! [`MintChain`] client → `Confirmed(tx_hash)` or `Failed`.
//!
//! # Example
//!
//! ```ignore
//! use nft_drop::MintOrchestrator;
//!
//! let session = MintOrchestrator::new(client);
//! match session.request_mint(2).await? {
//!     MintPhase::Confirmed { tx_hash } => println!("minted: {tx_hash}"),
//!     MintPhase::Failed { message, .. } => println!("denied: {message}"),
//!     _ => unreachable!("request_mint resolves to a terminal phase"),
//! }
//! ```

pub mod chain;
pub mod eligibility;
pub mod fetch;
pub mod orchestrator;
pub mod plan;
pub mod state;

#[cfg(test)]
mod test_support;

pub use chain::MintChain;
pub use eligibility::{evaluate, Allowance, Verdict};
pub use fetch::{fetch_collection_info, fetch_snapshot};
pub use orchestrator::{MintOrchestrator, MintPhase, SessionError};
pub use plan::{build_plan, EntryPoint, MintPlan};
pub use state::{clamp_quantity, CollectionInfo, DropSnapshot, MAX_REQUEST_QUANTITY};
