use crate::units::UnitsError;
use client::BoxError;
use thiserror::Error;

/// Errors raised by [`TokenClient`](crate::TokenClient).
///
/// Collaborator failures are tagged with the contract method that caused them
/// and otherwise passed through untouched. Nothing is retried.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Malformed address, rejected before any network call
    #[error("Invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Read call reverted or the RPC layer failed
    #[error("Call to {method} failed: {source}")]
    Execution {
        method: &'static str,
        #[source]
        source: BoxError,
    },

    /// Signing or broadcast failed
    #[error("Submitting {method} failed: {source}")]
    Submission {
        method: &'static str,
        #[source]
        source: BoxError,
    },

    /// Return data does not match the ABI
    #[error("Failed to decode {method} output: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },

    /// Write requested without an override or default signer
    #[error("No signer available to send {method}")]
    MissingSigner { method: &'static str },

    #[error(transparent)]
    Units(#[from] UnitsError),
}
