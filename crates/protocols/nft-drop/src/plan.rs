//! Mint plan building
//!
//! Turns a positive verdict into the concrete payable invocation: entry
//! point, arguments, and the exact value to send.
//!
//! # Units
//!
//! Prices and values are wei in `U256`. The total is computed with checked
//! 256-bit multiplication — never floating point, where fractional-wei
//! rounding would under- or over-pay.

use mintgate_core::{Address, TxError, U256};

use crate::eligibility::Allowance;

/// The payable entry point a plan invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Public sale: `mint(uint256)`
    Mint,
    /// Presale: `preMint(uint256)`
    PreMint,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::PreMint => "preMint",
        }
    }
}

/// A fully determined mint invocation. Built only from an allowance,
/// immutable, and consumed exactly once by submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintPlan {
    pub entry_point: EntryPoint,
    /// The account submitting (and receiving) the mint
    pub caller: Address,
    pub quantity: u64,
    /// Total value to send: price per unit × quantity (wei)
    pub value: U256,
}

/// Build the invocation plan for an allowed mint.
///
/// Only an [`Allowance`] — the payload of a positive verdict — is accepted
/// here, so a denied verdict cannot reach the builder; callers must branch on
/// the verdict first.
pub fn build_plan(
    allowance: &Allowance,
    caller: Address,
    quantity: u64,
) -> Result<MintPlan, TxError> {
    let value = allowance
        .price_per_unit
        .checked_mul(U256::from(quantity))
        .ok_or(TxError::ValueOverflow)?;

    let entry_point = if allowance.uses_presale {
        EntryPoint::PreMint
    } else {
        EntryPoint::Mint
    };

    Ok(MintPlan {
        entry_point,
        caller,
        quantity,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public_allowance(price: u64) -> Allowance {
        Allowance {
            price_per_unit: U256::from(price),
            uses_presale: false,
        }
    }

    #[test]
    fn test_entry_point_names() {
        assert_eq!(EntryPoint::Mint.as_str(), "mint");
        assert_eq!(EntryPoint::PreMint.as_str(), "preMint");
    }

    #[test]
    fn public_plan_uses_mint_entry_point() {
        let plan = build_plan(&public_allowance(12_500_000_000_000_000), Address::ZERO, 2).unwrap();
        assert_eq!(plan.entry_point, EntryPoint::Mint);
        assert_eq!(plan.quantity, 2);
        assert_eq!(plan.value, U256::from(25_000_000_000_000_000u64));
    }

    #[test]
    fn presale_plan_uses_premint_entry_point() {
        let allowance = Allowance {
            price_per_unit: U256::from(10_000_000_000_000_000u64),
            uses_presale: true,
        };
        let plan = build_plan(&allowance, Address::ZERO, 1).unwrap();
        assert_eq!(plan.entry_point, EntryPoint::PreMint);
        assert_eq!(plan.value, U256::from(10_000_000_000_000_000u64));
    }

    #[test]
    fn value_is_exact_for_large_quantities() {
        // 0.0125 ETH × 9_999_999 — a product that loses precision in f64
        let plan = build_plan(
            &public_allowance(12_500_000_000_000_000),
            Address::ZERO,
            9_999_999,
        )
        .unwrap();
        assert_eq!(plan.value, U256::from(124_999_987_500_000_000_000_000u128));
    }

    #[test]
    fn value_overflow_is_rejected() {
        let allowance = Allowance {
            price_per_unit: U256::MAX,
            uses_presale: false,
        };
        let result = build_plan(&allowance, Address::ZERO, 2);
        assert!(matches!(result, Err(TxError::ValueOverflow)));
    }

    #[test]
    fn quantity_one_sends_unit_price() {
        let plan = build_plan(&public_allowance(7), Address::ZERO, 1).unwrap();
        assert_eq!(plan.value, U256::from(7u64));
    }
}
