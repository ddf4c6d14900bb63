//! Scripted in-memory chain for engine tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use mintgate_core::{Address, ChainError, TxError, TxHash, U256};
use tokio::sync::Notify;

use crate::chain::MintChain;
use crate::plan::MintPlan;
use crate::state::DropSnapshot;

/// The open-sale scenario used across the engine tests: 2220 of 2222 minted,
/// 0.0125 ETH public price, cap of 10 per wallet.
pub fn open_sale_snapshot() -> DropSnapshot {
    DropSnapshot {
        caller: Address::repeat_byte(0x11),
        total_supply: 2220,
        max_supply: 2222,
        public_sale_price: U256::from(12_500_000_000_000_000u64),
        presale_price: None,
        public_sale_active: true,
        caller_has_presale_access: false,
        paused: false,
        max_per_wallet: Some(10),
        caller_balance: 0,
    }
}

/// A `MintChain` that serves scripted values and records submissions.
pub struct MockChain {
    snapshot: DropSnapshot,
    caller: Option<Address>,
    read_failure: Option<ChainError>,
    submit_error: Option<TxError>,
    submit_gate: Option<Arc<Notify>>,
    submissions: AtomicUsize,
}

impl MockChain {
    pub fn new(snapshot: DropSnapshot) -> Self {
        Self {
            caller: Some(snapshot.caller),
            snapshot,
            read_failure: None,
            submit_error: None,
            submit_gate: None,
            submissions: AtomicUsize::new(0),
        }
    }

    /// Every required read fails with this error.
    pub fn with_read_failure(mut self, error: ChainError) -> Self {
        self.read_failure = Some(error);
        self
    }

    /// Submissions fail with this error (after being counted).
    pub fn with_submit_error(mut self, error: TxError) -> Self {
        self.submit_error = Some(error);
        self
    }

    /// Submissions park on this gate until notified.
    pub fn with_submit_gate(mut self, gate: Arc<Notify>) -> Self {
        self.submit_gate = Some(gate);
        self
    }

    /// Behave like a read-only client with no configured account.
    pub fn without_caller(mut self) -> Self {
        self.caller = None;
        self
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    fn read<T>(&self, value: T) -> Result<T, ChainError> {
        match &self.read_failure {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl MintChain for MockChain {
    fn caller(&self) -> Option<Address> {
        self.caller
    }

    async fn total_supply(&self) -> Result<u64, ChainError> {
        self.read(self.snapshot.total_supply)
    }

    async fn max_supply(&self) -> Result<u64, ChainError> {
        self.read(self.snapshot.max_supply)
    }

    async fn public_sale_price(&self) -> Result<U256, ChainError> {
        self.read(self.snapshot.public_sale_price)
    }

    async fn presale_price(&self) -> Result<Option<U256>, ChainError> {
        self.read(self.snapshot.presale_price)
    }

    async fn public_sale_active(&self) -> Result<bool, ChainError> {
        self.read(self.snapshot.public_sale_active)
    }

    async fn paused(&self) -> Result<Option<bool>, ChainError> {
        self.read(Some(self.snapshot.paused))
    }

    async fn max_per_wallet(&self) -> Result<Option<u64>, ChainError> {
        self.read(self.snapshot.max_per_wallet)
    }

    async fn balance_of(&self, _owner: Address) -> Result<u64, ChainError> {
        self.read(self.snapshot.caller_balance)
    }

    async fn presale_access(&self, _account: Address) -> Result<Option<bool>, ChainError> {
        self.read(Some(self.snapshot.caller_has_presale_access))
    }

    async fn collection_name(&self) -> Option<String> {
        None
    }

    async fn collection_symbol(&self) -> Option<String> {
        None
    }

    async fn submit(&self, _plan: &MintPlan) -> Result<TxHash, TxError> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.submit_gate {
            gate.notified().await;
        }
        match &self.submit_error {
            Some(error) => Err(error.clone()),
            None => Ok(TxHash::repeat_byte(0xab)),
        }
    }
}
