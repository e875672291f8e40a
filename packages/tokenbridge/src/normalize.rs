//! Conversion between the wire's fixed 8 decimal precision and a denomination's native
//! precision.
//!
//! Scaling up is exact. Scaling down floors, so `truncate(untruncate(x, d), d) <= x` for every
//! `x` and `d`.

use cosmwasm_std::Uint256;
use thiserror::Error;

/// Number of decimals every amount is encoded with on the wire.
pub const WIRE_DECIMALS: u32 = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("scaling {amount} by 10^{exponent} overflows 256 bits")]
pub struct NormalizeError {
    pub amount: Uint256,
    pub exponent: u32,
}

/// Converts a wire amount into an amount with `decimals` native decimals.
pub fn untruncate(amount: Uint256, decimals: u32) -> Result<Uint256, NormalizeError> {
    rescale(amount, WIRE_DECIMALS, decimals)
}

/// Converts an amount with `decimals` native decimals into a wire amount, dropping any
/// precision the wire cannot carry.
pub fn truncate(amount: Uint256, decimals: u32) -> Result<Uint256, NormalizeError> {
    rescale(amount, decimals, WIRE_DECIMALS)
}

fn rescale(amount: Uint256, from: u32, to: u32) -> Result<Uint256, NormalizeError> {
    if to >= from {
        let exponent = to - from;
        pow10(exponent)
            .and_then(|m| amount.checked_mul(m).ok())
            .ok_or(NormalizeError { amount, exponent })
    } else {
        // A divisor that overflows is larger than any amount.
        Ok(pow10(from - to)
            .map(|d| amount / d)
            .unwrap_or_else(Uint256::zero))
    }
}

fn pow10(exponent: u32) -> Option<Uint256> {
    Uint256::from(10u8).checked_pow(exponent).ok()
}
