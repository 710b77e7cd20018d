//! Typed ERC20 client.
//!
//! [`TokenClient`] maps the ERC20 methods onto the generic read and submit
//! capabilities of a [`ContractRuntime`]. It adds three things on top of
//! plain delegation:
//! - a per-client cache for `name`, `symbol` and `decimals`
//! - address normalization before anything is encoded
//! - exact conversion between base units and display units
//!
//! ```ignore
//! let provider = client::create_provider(rpc_url, client::DEFAULT_REQUEST_TIMEOUT)?;
//! let runtime = client::RpcRuntime::connect(provider).await?;
//! let weth = TokenClient::new(runtime, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")?;
//!
//! let balance = weth.balance_of(holder).await?;
//! println!("{} {}", weth.to_display_units(balance).await?, weth.symbol().await?);
//! ```

mod address;
mod alias;
mod cache;
mod erc20;
mod error;
pub mod metrics;
pub mod units;

pub use address::{checksum, IntoAddress};
pub use erc20::{TokenClient, TokenInfo};
pub use error::TokenError;
pub use units::{to_base_units, to_display_units, UnitsError};

pub use client::{ContractRuntime, FunctionDescriptor, TransactionParameters, TxSigner};
