//! Address normalization.
//!
//! Every address argument goes through [`IntoAddress`] before it is encoded,
//! so a malformed string fails here instead of on the node.

use crate::TokenError;
use alloy_primitives::Address;

/// Values accepted wherever the token API takes an address.
///
/// Typed [`Address`] values are canonical already. Strings are parsed as 20
/// hex bytes, with or without `0x`, in any letter case.
pub trait IntoAddress {
    fn into_address(self) -> Result<Address, TokenError>;
}

impl IntoAddress for Address {
    fn into_address(self) -> Result<Address, TokenError> {
        Ok(self)
    }
}

impl IntoAddress for &Address {
    fn into_address(self) -> Result<Address, TokenError> {
        Ok(*self)
    }
}

impl IntoAddress for &str {
    fn into_address(self) -> Result<Address, TokenError> {
        parse_address(self)
    }
}

impl IntoAddress for String {
    fn into_address(self) -> Result<Address, TokenError> {
        parse_address(&self)
    }
}

impl IntoAddress for &String {
    fn into_address(self) -> Result<Address, TokenError> {
        parse_address(self)
    }
}

fn parse_address(input: &str) -> Result<Address, TokenError> {
    input
        .parse::<Address>()
        .map_err(|e| TokenError::InvalidAddress {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// EIP-55 checksummed form of `input`.
pub fn checksum(input: &str) -> Result<String, TokenError> {
    Ok(parse_address(input)?.to_checksum(None))
}
