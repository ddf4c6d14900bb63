//! Mint orchestration
//!
//! The stateful coordinator behind a mint button: takes a fresh snapshot,
//! evaluates eligibility, builds the plan, submits it, and tracks the
//! attempt through a small state machine.
//!
//! One orchestrator serves one UI session and allows at most one in-flight
//! attempt. Denied and failed attempts are never retried automatically —
//! re-minting is always an explicit caller action.

use std::sync::atomic::{AtomicBool, Ordering};

use mintgate_core::{short_address, ChainError};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::chain::MintChain;
use crate::eligibility::{evaluate, Verdict};
use crate::fetch::fetch_snapshot;
use crate::plan::build_plan;

/// Lifecycle of the session's current mint attempt.
///
/// Terminal phases (`Confirmed`, `Failed`) transition back to `Idle` only
/// through [`MintOrchestrator::reset`], never automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum MintPhase {
    Idle,
    Submitting,
    Confirmed {
        tx_hash: mintgate_core::TxHash,
    },
    Failed {
        /// Stable machine-readable code (denial codes or a transport class)
        code: String,
        message: String,
    },
}

impl MintPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Confirmed { .. } => "confirmed",
            Self::Failed { .. } => "failed",
        }
    }

    fn failed(code: &str, message: impl ToString) -> Self {
        Self::Failed {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Caller-misuse errors. These never reach the phase state machine: the
/// attempt they belong to was not started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("A mint attempt is already in progress")]
    AttemptInProgress,

    #[error("Previous attempt must be cleared before minting again")]
    NotIdle,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Cannot reset while a mint attempt is in progress")]
    ResetWhileSubmitting,
}

/// Per-session mint coordinator. Owns the only long-lived mutable state in
/// the engine: the current [`MintPhase`].
pub struct MintOrchestrator<C> {
    chain: C,
    phase: Mutex<MintPhase>,
    in_flight: AtomicBool,
}

impl<C: MintChain> MintOrchestrator<C> {
    pub fn new(chain: C) -> Self {
        Self {
            chain,
            phase: Mutex::new(MintPhase::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The chain client this session submits through.
    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Current phase of the session's mint attempt.
    pub async fn phase(&self) -> MintPhase {
        self.phase.lock().await.clone()
    }

    /// Clear a terminal phase back to `Idle`.
    pub async fn reset(&self) -> Result<MintPhase, SessionError> {
        if self.in_flight.load(Ordering::SeqCst) {
            return Err(SessionError::ResetWhileSubmitting);
        }
        let mut phase = self.phase.lock().await;
        if matches!(*phase, MintPhase::Submitting) {
            return Err(SessionError::ResetWhileSubmitting);
        }
        *phase = MintPhase::Idle;
        Ok(MintPhase::Idle)
    }

    /// Run one mint attempt to its terminal phase.
    ///
    /// Rejected without touching the state machine when a quantity of 0 is
    /// requested, when an attempt is already in flight (the double-click
    /// guard: the losing call never causes a second submission), or when a
    /// previous attempt has not been cleared.
    pub async fn request_mint(&self, quantity: u64) -> Result<MintPhase, SessionError> {
        if quantity == 0 {
            return Err(SessionError::InvalidQuantity);
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SessionError::AttemptInProgress);
        }

        {
            let mut phase = self.phase.lock().await;
            if !matches!(*phase, MintPhase::Idle) {
                self.in_flight.store(false, Ordering::SeqCst);
                return Err(SessionError::NotIdle);
            }
            *phase = MintPhase::Submitting;
        }

        let outcome = self.run_attempt(quantity).await;

        *self.phase.lock().await = outcome.clone();
        self.in_flight.store(false, Ordering::SeqCst);
        Ok(outcome)
    }

    async fn run_attempt(&self, quantity: u64) -> MintPhase {
        let caller = match self.chain.caller() {
            Some(address) => address,
            None => return MintPhase::failed("no_caller", ChainError::NoCaller),
        };

        // Always a fresh snapshot: price or supply may have moved since the
        // last read, and a stale value would under- or over-pay.
        let snapshot = match fetch_snapshot(&self.chain, caller).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Snapshot fetch failed: {}", e);
                return MintPhase::failed("read_failed", e);
            }
        };

        let allowance = match evaluate(&snapshot, quantity) {
            Verdict::Denied(reason) => {
                tracing::info!(code = reason.error_code(), "Mint denied: {}", reason);
                return MintPhase::failed(reason.error_code(), reason);
            }
            Verdict::Allowed(allowance) => allowance,
        };

        let plan = match build_plan(&allowance, snapshot.caller, quantity) {
            Ok(plan) => plan,
            Err(e) => return MintPhase::failed("plan_failed", e),
        };

        tracing::info!(
            caller = %short_address(&plan.caller),
            entry_point = plan.entry_point.as_str(),
            quantity = plan.quantity,
            value = %plan.value,
            "Submitting mint"
        );

        match self.chain.submit(&plan).await {
            Ok(tx_hash) => {
                tracing::info!(tx_hash = %tx_hash, "Mint submitted");
                MintPhase::Confirmed { tx_hash }
            }
            Err(e) => {
                tracing::warn!("Mint submission failed: {}", e);
                MintPhase::failed("submission_failed", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{open_sale_snapshot, MockChain};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn successful_mint_confirms() {
        let orchestrator = MintOrchestrator::new(MockChain::new(open_sale_snapshot()));

        let outcome = orchestrator.request_mint(2).await.unwrap();
        assert!(matches!(outcome, MintPhase::Confirmed { .. }));
        assert_eq!(orchestrator.phase().await, outcome);
        assert_eq!(orchestrator.chain().submission_count(), 1);
    }

    #[tokio::test]
    async fn denied_mint_fails_without_submission() {
        let mut snapshot = open_sale_snapshot();
        snapshot.paused = true;
        let orchestrator = MintOrchestrator::new(MockChain::new(snapshot));

        let outcome = orchestrator.request_mint(1).await.unwrap();
        match outcome {
            MintPhase::Failed { code, .. } => assert_eq!(code, "sale_paused"),
            other => panic!("Expected Failed, got {:?}", other),
        }
        assert_eq!(orchestrator.chain().submission_count(), 0);
    }

    #[tokio::test]
    async fn read_failure_becomes_failed_phase() {
        let chain = MockChain::new(open_sale_snapshot()).with_read_failure(ChainError::Rpc {
            message: "connection refused".to_string(),
        });
        let orchestrator = MintOrchestrator::new(chain);

        let outcome = orchestrator.request_mint(1).await.unwrap();
        match outcome {
            MintPhase::Failed { code, message } => {
                assert_eq!(code, "read_failed");
                assert!(message.contains("connection refused"));
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn submission_failure_becomes_failed_phase() {
        let chain = MockChain::new(open_sale_snapshot()).with_submit_error(
            mintgate_core::TxError::SubmissionFailed {
                message: "execution reverted".to_string(),
            },
        );
        let orchestrator = MintOrchestrator::new(chain);

        let outcome = orchestrator.request_mint(1).await.unwrap();
        match outcome {
            MintPhase::Failed { code, message } => {
                assert_eq!(code, "submission_failed");
                assert!(message.contains("execution reverted"));
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
        // One submission happened; the failure is not retried.
        assert_eq!(orchestrator.chain().submission_count(), 1);
    }

    #[tokio::test]
    async fn second_request_while_submitting_is_rejected() {
        let gate = Arc::new(Notify::new());
        let chain = MockChain::new(open_sale_snapshot()).with_submit_gate(gate.clone());
        let orchestrator = Arc::new(MintOrchestrator::new(chain));

        let background = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.request_mint(1).await })
        };

        // Wait until the first attempt is parked in submit()
        while orchestrator.phase().await != MintPhase::Submitting {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let second = orchestrator.request_mint(1).await;
        assert_eq!(second, Err(SessionError::AttemptInProgress));

        gate.notify_one();
        let first = background.await.unwrap().unwrap();
        assert!(matches!(first, MintPhase::Confirmed { .. }));
        // The rejected call never reached the chain client
        assert_eq!(orchestrator.chain().submission_count(), 1);
    }

    #[tokio::test]
    async fn terminal_phase_requires_reset() {
        let orchestrator = MintOrchestrator::new(MockChain::new(open_sale_snapshot()));

        orchestrator.request_mint(1).await.unwrap();
        assert_eq!(
            orchestrator.request_mint(1).await,
            Err(SessionError::NotIdle)
        );

        assert_eq!(orchestrator.reset().await.unwrap(), MintPhase::Idle);
        let outcome = orchestrator.request_mint(1).await.unwrap();
        assert!(matches!(outcome, MintPhase::Confirmed { .. }));
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected_at_the_boundary() {
        let orchestrator = MintOrchestrator::new(MockChain::new(open_sale_snapshot()));

        assert_eq!(
            orchestrator.request_mint(0).await,
            Err(SessionError::InvalidQuantity)
        );
        assert_eq!(orchestrator.phase().await, MintPhase::Idle);
        assert_eq!(orchestrator.chain().submission_count(), 0);
    }

    #[tokio::test]
    async fn reset_while_submitting_is_rejected() {
        let gate = Arc::new(Notify::new());
        let chain = MockChain::new(open_sale_snapshot()).with_submit_gate(gate.clone());
        let orchestrator = Arc::new(MintOrchestrator::new(chain));

        let background = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.request_mint(1).await })
        };

        while orchestrator.phase().await != MintPhase::Submitting {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        assert_eq!(
            orchestrator.reset().await,
            Err(SessionError::ResetWhileSubmitting)
        );

        gate.notify_one();
        background.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn missing_caller_fails_cleanly() {
        let chain = MockChain::new(open_sale_snapshot()).without_caller();
        let orchestrator = MintOrchestrator::new(chain);

        let outcome = orchestrator.request_mint(1).await.unwrap();
        match outcome {
            MintPhase::Failed { code, .. } => assert_eq!(code, "no_caller"),
            other => panic!("Expected Failed, got {:?}", other),
        }
    }
}
