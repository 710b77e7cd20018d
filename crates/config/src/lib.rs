//! Configuration types for the ERC20 tooling.
//!
//! This crate provides:
//! - Network presets (chain ids, well-known token addresses)
//! - Configuration file loading

pub mod network;
pub mod settings;

pub use network::{NetworkConfig, NetworkType};
pub use settings::{Config, RemoteSignerConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or misses required fields
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Symbol has no preset address on the network
    #[error("Unknown token {symbol} on {network}")]
    UnknownToken {
        symbol: String,
        network: NetworkType,
    },
}
