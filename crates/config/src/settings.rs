use crate::{ConfigError, NetworkConfig, NetworkType};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

const fn default_request_timeout_secs() -> u64 {
    30
}

/// Top-level configuration, read from a TOML file.
///
/// ```toml
/// rpc_url = "https://ethereum-sepolia-rpc.publicnode.com"
/// request_timeout_secs = 10
/// network = "sepolia"
/// token = "USDC"
///
/// [signer]
/// proxy_url = "http://localhost:9060"
/// address = "0x5CFFA347b0aE99cc01E5c01714cA5658e54a23D1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint url
    pub rpc_url: String,

    /// Per-request timeout for the RPC transport
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Network preset, needed to refer to tokens by symbol
    pub network: Option<NetworkType>,

    /// Token contract: an address, or a symbol known to `network`
    pub token: Option<String>,

    /// Remote signer used as the default sender
    pub signer: Option<RemoteSignerConfig>,
}

/// Signer-proxy holding the key for `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSignerConfig {
    pub proxy_url: String,
    pub address: Address,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        contents.parse()
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn network_config(&self) -> Option<NetworkConfig> {
        self.network.map(NetworkConfig::from_network_type)
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
