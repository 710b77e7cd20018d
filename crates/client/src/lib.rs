//! Chain-facing collaborators for contract facades.
//!
//! This crate owns everything that touches the network or a private key:
//! - provider construction with a timeout-configured HTTP transport
//! - [`FunctionDescriptor`], an encoded but not yet executed contract call
//! - [`ContractRuntime`], the read/submit capability facades are written against
//! - transaction signers backed by a local key or a remote signer-proxy

mod descriptor;
mod params;
mod remote_signer;
mod runtime;
mod signer;

pub use descriptor::FunctionDescriptor;
pub use params::TransactionParameters;
pub use remote_signer::RemoteSigner;
pub use runtime::{fill_transaction, ContractRuntime, RpcRuntime};
pub use signer::{SignerFn, TxSigner};

use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use std::time::Duration;
use thiserror::Error;

/// Error type returned by collaborators: whatever the transport, the ABI layer
/// or the signer raised, unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Default per-request timeout for the HTTP transport.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error building the transport or reaching the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Create an ethereum rpc provider from url.
///
/// Every request made through the provider is bounded by `timeout`; the
/// transport does not retry on its own.
pub fn create_provider(
    rpc_url: &str,
    timeout: Duration,
) -> Result<impl Provider + Clone, ClientError> {
    let url: reqwest::Url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;

    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Connection(format!("{}", e)))?;

    let rpc_client = RpcClient::new(Http::with_client(http, url), false);
    let provider = ProviderBuilder::new().connect_client(rpc_client);

    Ok(provider)
}
