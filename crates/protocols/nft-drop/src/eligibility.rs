//! Mint eligibility evaluation
//!
//! Pure decision logic: no I/O, no async, just a snapshot and a quantity in,
//! a verdict out.
//!
//! The check order is part of the observable contract — a state matching
//! several denial conditions must report the most specific one. The pause
//! switch outranks sale gating, which outranks the numeric limits:
//!
//! 1. paused
//! 2. no active sale for this caller
//! 3. supply exhausted
//! 4. per-wallet cap exceeded
//! 5. allowed (public path preferred; presale path only when the public sale
//!    is inactive)

use mintgate_core::{DenialReason, U256};

use crate::state::DropSnapshot;

/// The payload of a positive verdict: which price applies and through which
/// entry point the mint must go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowance {
    /// Price per token (wei)
    pub price_per_unit: U256,
    /// True when the presale entry point must be used
    pub uses_presale: bool,
}

/// Outcome of an eligibility check. Owned by the caller for the duration of
/// one attempt; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed(Allowance),
    Denied(DenialReason),
}

impl Verdict {
    pub fn allowance(&self) -> Option<&Allowance> {
        match self {
            Self::Allowed(allowance) => Some(allowance),
            Self::Denied(_) => None,
        }
    }

    pub fn denial(&self) -> Option<&DenialReason> {
        match self {
            Self::Allowed(_) => None,
            Self::Denied(reason) => Some(reason),
        }
    }
}

/// Evaluate whether `quantity` tokens can be minted for the snapshot's caller.
///
/// Precondition: `quantity >= 1` (enforced at the orchestrator boundary).
/// The additions are checked, so an absurdly large request counts against
/// supply and cap the same way an over-large one does.
pub fn evaluate(snapshot: &DropSnapshot, quantity: u64) -> Verdict {
    if snapshot.paused {
        return Verdict::Denied(DenialReason::Paused);
    }

    if !snapshot.public_sale_active && !snapshot.caller_has_presale_access {
        return Verdict::Denied(DenialReason::NoActiveSale);
    }

    let within_supply = snapshot
        .total_supply
        .checked_add(quantity)
        .is_some_and(|minted| minted <= snapshot.max_supply);
    if !within_supply {
        return Verdict::Denied(DenialReason::InsufficientSupply {
            remaining: snapshot.remaining(),
        });
    }

    if let Some(cap) = snapshot.max_per_wallet {
        let within_cap = snapshot
            .caller_balance
            .checked_add(quantity)
            .is_some_and(|held| held <= cap);
        if !within_cap {
            return Verdict::Denied(DenialReason::WalletCapExceeded { cap });
        }
    }

    if snapshot.public_sale_active {
        // When both phases are open the public path wins; presale pricing
        // applies only to allowlisted callers before the public sale opens.
        return Verdict::Allowed(Allowance {
            price_per_unit: snapshot.public_sale_price,
            uses_presale: false,
        });
    }

    match snapshot.presale_price {
        Some(price) => Verdict::Allowed(Allowance {
            price_per_unit: price,
            uses_presale: true,
        }),
        None => Verdict::Denied(DenialReason::PresaleMisconfigured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintgate_core::Address;

    fn open_sale() -> DropSnapshot {
        DropSnapshot {
            caller: Address::ZERO,
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

    #[test]
    fn paused_denies_regardless_of_other_fields() {
        let snapshot = DropSnapshot {
            paused: true,
            caller_has_presale_access: true,
            presale_price: Some(U256::from(1u64)),
            ..open_sale()
        };
        assert_eq!(evaluate(&snapshot, 1), Verdict::Denied(DenialReason::Paused));
    }

    #[test]
    fn no_sale_active_denies() {
        let snapshot = DropSnapshot {
            public_sale_active: false,
            caller_has_presale_access: false,
            ..open_sale()
        };
        assert_eq!(
            evaluate(&snapshot, 1),
            Verdict::Denied(DenialReason::NoActiveSale)
        );
    }

    #[test]
    fn supply_exhaustion_reports_remaining() {
        let snapshot = open_sale();
        let verdict = evaluate(&snapshot, 3);
        assert_eq!(
            verdict.denial(),
            Some(&DenialReason::InsufficientSupply { remaining: 2 })
        );
        assert!(verdict.allowance().is_none());
    }

    #[test]
    fn request_up_to_remaining_supply_is_allowed() {
        let snapshot = open_sale();
        assert_eq!(
            evaluate(&snapshot, 2),
            Verdict::Allowed(Allowance {
                price_per_unit: U256::from(12_500_000_000_000_000u64),
                uses_presale: false,
            })
        );
    }

    #[test]
    fn wallet_cap_binds_after_supply() {
        let snapshot = DropSnapshot {
            total_supply: 0,
            caller_balance: 9,
            ..open_sale()
        };
        assert_eq!(
            evaluate(&snapshot, 2),
            Verdict::Denied(DenialReason::WalletCapExceeded { cap: 10 })
        );
        assert!(evaluate(&snapshot, 1).allowance().is_some());
    }

    #[test]
    fn no_wallet_cap_means_unlimited_per_wallet() {
        let snapshot = DropSnapshot {
            total_supply: 0,
            max_per_wallet: None,
            caller_balance: 500,
            ..open_sale()
        };
        assert!(evaluate(&snapshot, 20).allowance().is_some());
    }

    #[test]
    fn presale_path_selected_when_public_sale_inactive() {
        let snapshot = DropSnapshot {
            total_supply: 0,
            public_sale_active: false,
            caller_has_presale_access: true,
            presale_price: Some(U256::from(10_000_000_000_000_000u64)),
            ..open_sale()
        };
        assert_eq!(
            evaluate(&snapshot, 1),
            Verdict::Allowed(Allowance {
                price_per_unit: U256::from(10_000_000_000_000_000u64),
                uses_presale: true,
            })
        );
    }

    #[test]
    fn public_path_wins_when_both_phases_active() {
        let snapshot = DropSnapshot {
            total_supply: 0,
            caller_has_presale_access: true,
            presale_price: Some(U256::from(1u64)),
            ..open_sale()
        };
        let verdict = evaluate(&snapshot, 1);
        let allowance = verdict.allowance().expect("should be allowed");
        assert!(!allowance.uses_presale);
        assert_eq!(
            allowance.price_per_unit,
            U256::from(12_500_000_000_000_000u64)
        );
    }

    #[test]
    fn presale_without_price_is_misconfigured() {
        let snapshot = DropSnapshot {
            total_supply: 0,
            public_sale_active: false,
            caller_has_presale_access: true,
            presale_price: None,
            ..open_sale()
        };
        assert_eq!(
            evaluate(&snapshot, 1),
            Verdict::Denied(DenialReason::PresaleMisconfigured)
        );
    }

    #[test]
    fn pause_outranks_supply_and_cap() {
        // Matches every denial condition at once; pause must win.
        let snapshot = DropSnapshot {
            paused: true,
            public_sale_active: false,
            total_supply: 2222,
            caller_balance: 10,
            ..open_sale()
        };
        assert_eq!(evaluate(&snapshot, 5), Verdict::Denied(DenialReason::Paused));
    }

    #[test]
    fn huge_quantity_does_not_overflow() {
        let snapshot = DropSnapshot {
            total_supply: 1,
            ..open_sale()
        };
        assert_eq!(
            evaluate(&snapshot, u64::MAX),
            Verdict::Denied(DenialReason::InsufficientSupply { remaining: 2221 })
        );
    }
}
