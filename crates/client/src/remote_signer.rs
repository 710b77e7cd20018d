//! Signing through a signer-proxy service.
//!
//! The proxy exposes `eth_signTransaction` over JSON-RPC and keeps the key
//! material (typically in an HSM or secure enclave). It returns the raw signed
//! transaction, which the runtime broadcasts itself.

use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::TransactionRequest;
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Client for a remote signer-proxy holding the key for one address.
///
/// # Example
///
/// ```ignore
/// let remote = RemoteSigner::new("http://localhost:9060", address);
/// let signer = TxSigner::remote(remote);
/// ```
#[derive(Debug, Clone)]
pub struct RemoteSigner {
    http: reqwest::Client,
    proxy_url: String,
    address: Address,
}

impl RemoteSigner {
    /// Creates a remote signer using a default HTTP client.
    pub fn new(proxy_url: impl Into<String>, address: Address) -> Self {
        Self::with_client(reqwest::Client::new(), proxy_url, address)
    }

    /// Creates a remote signer whose requests give up after `timeout`.
    pub fn with_timeout(
        proxy_url: impl Into<String>,
        address: Address,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, proxy_url, address))
    }

    /// Creates a remote signer with a custom HTTP client.
    pub fn with_client(http: reqwest::Client, proxy_url: impl Into<String>, address: Address) -> Self {
        Self {
            http,
            proxy_url: proxy_url.into(),
            address,
        }
    }

    /// Returns the signer's address.
    pub const fn address(&self) -> Address {
        self.address
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    /// Ask the proxy to sign `tx`; returns the raw signed bytes.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes> {
        debug!(proxy = %self.proxy_url, from = %self.address, "Requesting remote signature");

        let request = SignRequest {
            jsonrpc: "2.0",
            method: "eth_signTransaction",
            params: [tx],
            id: 1,
        };

        let response = self.http.post(&self.proxy_url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            bail!("signer-proxy returned {status}: {body}");
        }

        let reply: SignResponse = response.json().await?;
        reply.into_raw()
    }
}

#[derive(Debug, Serialize)]
struct SignRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: [TransactionRequest; 1],
    id: u32,
}

#[derive(Debug, Deserialize)]
struct SignResponse {
    result: Option<SignedTransaction>,
    error: Option<RpcFailure>,
}

impl SignResponse {
    fn into_raw(self) -> Result<Bytes> {
        match (self.result, self.error) {
            (Some(signed), _) => Ok(signed.raw.parse()?),
            (None, Some(error)) => bail!("JSON-RPC error {}: {}", error.code, error.message),
            (None, None) => bail!("signer-proxy returned neither result nor error"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcFailure {
    code: i64,
    message: String,
}

/// Result of `eth_signTransaction`: the signed transaction as hex-encoded RLP.
#[derive(Debug, Deserialize)]
struct SignedTransaction {
    raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_accessors() {
        let signer = RemoteSigner::new(
            "http://localhost:9060",
            address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1"),
        );

        assert_eq!(
            signer.address(),
            address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1")
        );
        assert_eq!(signer.proxy_url(), "http://localhost:9060");
    }

    #[test]
    fn test_response_with_result() {
        let reply: SignResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"result":{"raw":"0x02f8","tx":{}}}"#,
        )
        .unwrap();

        let raw = reply.into_raw().unwrap();
        assert_eq!(raw.as_ref(), &[0x02, 0xf8]);
    }

    #[test]
    fn test_response_with_error() {
        let reply: SignResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"key locked"}}"#,
        )
        .unwrap();

        let err = reply.into_raw().unwrap_err();
        assert!(err.to_string().contains("key locked"));
    }

    #[test]
    fn test_empty_response() {
        let reply: SignResponse = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).unwrap();
        assert!(reply.into_raw().is_err());
    }
}
