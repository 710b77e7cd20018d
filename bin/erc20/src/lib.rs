pub mod cli;
pub mod settings;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use eyre::{eyre, Result};
use std::str::FromStr;
use token::{ContractRuntime, TokenClient, TokenError};

/// An amount typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    /// Base units, used as-is
    Raw(U256),
    /// Display units, scaled by the token's decimals
    Display(BigDecimal),
}

impl Amount {
    pub fn parse(input: &str, raw: bool) -> Result<Self> {
        if raw {
            let value = U256::from_str(input)
                .map_err(|e| eyre!("Invalid base unit amount {input:?}: {e}"))?;
            return Ok(Self::Raw(value));
        }

        let value = BigDecimal::from_str(input)
            .map_err(|e| eyre!("Invalid amount {input:?}: {e}"))?;
        Ok(Self::Display(value))
    }

    /// Amount in base units. Display amounts cost a `decimals` read the first
    /// time.
    pub async fn to_base_units<R>(&self, token: &TokenClient<R>) -> Result<U256, TokenError>
    where
        R: ContractRuntime,
    {
        match self {
            Self::Raw(value) => Ok(*value),
            Self::Display(value) => token.to_base_units(value).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_amount() {
        let amount = Amount::parse("1.25", false).unwrap();
        assert_eq!(amount, Amount::Display(BigDecimal::from_str("1.25").unwrap()));
    }

    #[test]
    fn test_parse_raw_amount() {
        let amount = Amount::parse("1000000", true).unwrap();
        assert_eq!(amount, Amount::Raw(U256::from(1_000_000)));
    }

    #[test]
    fn test_raw_amount_rejects_fractions() {
        assert!(Amount::parse("1.5", true).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(Amount::parse("ten", false).is_err());
    }
}
