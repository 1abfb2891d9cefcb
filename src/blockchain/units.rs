// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Unit normalization for on-chain balances.
//!
//! Chains report balances in their smallest denomination; the API reports
//! human units: `human = raw / 10^decimals`, serialized as a JSON integer
//! when the division is exact and as a number rounded to 6 decimal places
//! otherwise.

use alloy::primitives::U256;
use serde::Serialize;

/// Decimal places kept for non-integral balances.
const FRACTION_DIGITS: i32 = 6;

/// A human-unit balance: either an exact whole number or a rounded decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Whole(u128),
    Fractional(f64),
}

impl Amount {
    /// Convert a smallest-unit balance into human units.
    pub fn from_raw(raw: U256, decimals: u8) -> Self {
        let divisor = U256::from(10u64).pow(U256::from(decimals));
        let whole = raw / divisor;
        let remainder = raw % divisor;

        if remainder.is_zero() {
            return match u128::try_from(whole) {
                Ok(value) => Amount::Whole(value),
                Err(_) => Amount::Fractional(u256_to_f64(whole)),
            };
        }

        // remainder < 10^decimals, which fits in u128 for any token
        // decimals value seen in the wild.
        let fraction =
            u128::try_from(remainder).unwrap_or(0) as f64 / 10f64.powi(i32::from(decimals));
        Amount::from_f64(u256_to_f64(whole) + fraction)
    }

    /// Round to 6 decimal places, collapsing to a whole number when exact.
    pub fn from_f64(value: f64) -> Self {
        let scale = 10f64.powi(FRACTION_DIGITS);
        let rounded = (value * scale).round() / scale;

        if rounded.fract() == 0.0 && rounded >= 0.0 && rounded < u128::MAX as f64 {
            Amount::Whole(rounded as u128)
        } else {
            Amount::Fractional(rounded)
        }
    }

    /// USD valuation at the given spot price, with the same rounding rule.
    pub fn usd_value(&self, usd_price: f64) -> Amount {
        Amount::from_f64(self.as_f64() * usd_price)
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Whole(value) => *value as f64,
            Amount::Fractional(value) => *value,
        }
    }
}

/// Lossy widening for balances too large for u128. Precision loss is
/// acceptable here; the original service went through IEEE floats as well.
fn u256_to_f64(value: U256) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_yields_whole_number() {
        // 1 USDC = 1e6 smallest units at 6 decimals.
        let amount = Amount::from_raw(U256::from(1_000_000u64), 6);
        assert_eq!(amount, Amount::Whole(1));
    }

    #[test]
    fn smallest_unit_rounds_to_six_places() {
        let amount = Amount::from_raw(U256::from(1u64), 6);
        assert_eq!(amount, Amount::Fractional(0.000001));
    }

    #[test]
    fn native_balance_at_18_decimals() {
        // 1.5 ETH
        let amount = Amount::from_raw(U256::from(1_500_000_000_000_000_000u128), 18);
        assert_eq!(amount, Amount::Fractional(1.5));

        // Exactly 2 ETH
        let amount = Amount::from_raw(U256::from(2_000_000_000_000_000_000u128), 18);
        assert_eq!(amount, Amount::Whole(2));
    }

    #[test]
    fn sub_representable_fraction_truncates_to_zero() {
        // 1 wei at 18 decimals is below the 6-decimal resolution.
        let amount = Amount::from_raw(U256::from(1u64), 18);
        assert_eq!(amount, Amount::Whole(0));
    }

    #[test]
    fn zero_is_whole() {
        assert_eq!(Amount::from_raw(U256::ZERO, 18), Amount::Whole(0));
    }

    #[test]
    fn usd_value_rounds_and_collapses() {
        let amount = Amount::Whole(2);
        assert_eq!(amount.usd_value(1234.5), Amount::Whole(2469));

        let amount = Amount::Fractional(0.5);
        assert_eq!(amount.usd_value(3.333333), Amount::Fractional(1.666667));
    }

    #[test]
    fn serializes_as_bare_json_numbers() {
        let whole = serde_json::to_string(&Amount::Whole(5)).unwrap();
        assert_eq!(whole, "5");

        let fractional = serde_json::to_string(&Amount::Fractional(0.000902)).unwrap();
        assert_eq!(fractional, "0.000902");
    }
}
