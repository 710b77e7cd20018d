//! Network presets.
//!
//! Chain ids and the addresses of widely used tokens, so callers can refer to
//! a token by symbol instead of pasting its address.

use crate::ConfigError;
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Network type (mainnet or testnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    Sepolia,
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "ethereum" => Ok(Self::Mainnet),
            "sepolia" | "testnet" => Ok(Self::Sepolia),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Sepolia => f.write_str("sepolia"),
        }
    }
}

/// Chain parameters and well-known token addresses for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
    /// WETH contract address
    pub weth: Address,
    /// Circle USDC contract address
    pub usdc: Address,
}

impl NetworkConfig {
    /// Ethereum mainnet configuration.
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            chain_id: 1,
            weth: address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            // https://etherscan.io/token/0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48
            usdc: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        }
    }

    /// Ethereum Sepolia testnet configuration.
    pub const fn sepolia() -> Self {
        Self {
            network_type: NetworkType::Sepolia,
            chain_id: 11155111,
            weth: address!("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
            // https://sepolia.etherscan.io/token/0x1c7d4b196cb0c7b01d743fbc6116a902379c7238
            usdc: address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"),
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Sepolia => Self::sepolia(),
        }
    }

    /// Look up a well-known token by symbol (case-insensitive).
    pub fn token_address(&self, symbol: &str) -> Result<Address, ConfigError> {
        match symbol.to_ascii_uppercase().as_str() {
            "WETH" => Ok(self.weth),
            "USDC" => Ok(self.usdc),
            _ => Err(ConfigError::UnknownToken {
                symbol: symbol.to_string(),
                network: self.network_type,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_config() {
        let config = NetworkConfig::mainnet();
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.network_type, NetworkType::Mainnet);
    }

    #[test]
    fn test_sepolia_config() {
        let config = NetworkConfig::from_network_type(NetworkType::Sepolia);
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.network_type, NetworkType::Sepolia);
    }

    #[test]
    fn test_token_lookup_ignores_case() {
        let config = NetworkConfig::mainnet();
        assert_eq!(config.token_address("weth").unwrap(), config.weth);
        assert_eq!(config.token_address("USDC").unwrap(), config.usdc);
    }

    #[test]
    fn test_unknown_token() {
        let err = NetworkConfig::sepolia().token_address("DOGE").unwrap_err();
        assert!(err.to_string().contains("DOGE"));
        assert!(err.to_string().contains("sepolia"));
    }

    #[test]
    fn test_network_type_from_str() {
        assert_eq!("Mainnet".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("testnet".parse::<NetworkType>().unwrap(), NetworkType::Sepolia);
        assert!("goerli".parse::<NetworkType>().is_err());
    }
}
