use alloy_primitives::Address;
use client::{RemoteSigner, TxSigner};
use config::{Config, NetworkType, RemoteSignerConfig};
use eyre::{eyre, Result};
use std::{path::Path, time::Duration};
use token::IntoAddress;

/// Values given on the command line. Each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub network: Option<NetworkType>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Effective settings after merging the config file with [`Overrides`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub rpc_url: String,
    pub request_timeout: Duration,
    pub network: Option<NetworkType>,
    pub token: Option<String>,
    pub signer: Option<RemoteSignerConfig>,
}

impl Settings {
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let config = path.map(Config::from_file).transpose()?;
        Self::merge(config, overrides)
    }

    pub fn merge(config: Option<Config>, overrides: Overrides) -> Result<Self> {
        let (file_rpc_url, file_timeout, file_network, file_token, signer) = match config {
            Some(config) => (
                Some(config.rpc_url),
                Some(Duration::from_secs(config.request_timeout_secs)),
                config.network,
                config.token,
                config.signer,
            ),
            None => (None, None, None, None, None),
        };

        let rpc_url = overrides
            .rpc_url
            .or(file_rpc_url)
            .ok_or_else(|| eyre!("No RPC url: pass --rpc-url, set RPC_URL or use a config file"))?;

        let request_timeout = overrides
            .timeout_secs
            .map(Duration::from_secs)
            .or(file_timeout)
            .unwrap_or(client::DEFAULT_REQUEST_TIMEOUT);

        Ok(Self {
            rpc_url,
            request_timeout,
            network: overrides.network.or(file_network),
            token: overrides.token.or(file_token),
            signer,
        })
    }

    /// Token contract to operate on.
    ///
    /// `0x`-prefixed values are parsed as addresses; anything else is looked
    /// up as a symbol on the configured network.
    pub fn token_address(&self) -> Result<Address> {
        let input = self
            .token
            .as_deref()
            .ok_or_else(|| eyre!("No token: pass --token or set `token` in the config file"))?;

        if input.starts_with("0x") || input.starts_with("0X") {
            return Ok(input.into_address()?);
        }

        let network = self
            .network
            .ok_or_else(|| eyre!("Token symbol {input} needs a network: pass --network"))?;

        Ok(config::NetworkConfig::from_network_type(network).token_address(input)?)
    }

    /// Default signer for writes: a local private key if given, else the
    /// remote signer from the config file.
    pub fn signer(&self, private_key: Option<&str>) -> Result<Option<TxSigner>> {
        if let Some(key) = private_key {
            return Ok(Some(TxSigner::local(key)?));
        }

        match &self.signer {
            Some(remote) => {
                let remote = RemoteSigner::with_timeout(
                    remote.proxy_url.clone(),
                    remote.address,
                    self.request_timeout,
                )?;
                Ok(Some(TxSigner::remote(remote)))
            }
            None => Ok(None),
        }
    }
}
