//! Conversion between base units and display units.
//!
//! All arithmetic is exact: amounts are carried as [`BigDecimal`] and scaled
//! by powers of ten, never through floating point.

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    #[error("Amount {0} is negative")]
    Negative(BigDecimal),

    #[error("Amount {0} does not fit in 256 bits")]
    Overflow(BigDecimal),
}

/// `10^exponent` as an exact decimal. Negative exponents give `10^-n`.
fn pow10(exponent: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -exponent)
}

/// Convert a display amount to base units: `trunc(amount * 10^decimals)`.
///
/// With `decimals == 0` this is plain truncation to an integer.
pub fn to_base_units(amount: &BigDecimal, decimals: u8) -> Result<U256, UnitsError> {
    if amount.sign() == Sign::Minus {
        return Err(UnitsError::Negative(amount.clone()));
    }

    let scaled = amount.clone() * pow10(i64::from(decimals));
    let (digits, _) = scaled.with_scale(0).into_bigint_and_exponent();

    bigint_to_u256(&digits).ok_or_else(|| UnitsError::Overflow(amount.clone()))
}

/// Convert base units to a display amount: `amount / 10^decimals`, exact.
pub fn to_display_units(amount: U256, decimals: u8) -> BigDecimal {
    BigDecimal::new(u256_to_bigint(amount), i64::from(decimals))
}

/// Divide an arbitrary decimal by `10^decimals` without rounding.
pub fn scale_down(amount: &BigDecimal, decimals: u8) -> BigDecimal {
    amount.clone() * pow10(-i64::from(decimals))
}

/// Exact decimal value of a `U256`.
pub fn u256_to_decimal(value: U256) -> BigDecimal {
    to_display_units(value, 0)
}

fn u256_to_bigint(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>())
}

fn bigint_to_u256(value: &BigInt) -> Option<U256> {
    let (sign, bytes) = value.to_bytes_be();
    if sign == Sign::Minus {
        return None;
    }
    U256::try_from_be_slice(&bytes)
}
