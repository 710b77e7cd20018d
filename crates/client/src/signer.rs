use crate::{ClientError, RemoteSigner};
use alloy_consensus::TxEnvelope;
use alloy_network::{eip2718::Encodable2718, EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use std::{fmt, future::Future, pin::Pin, sync::Arc};

/// A function that signs a fully populated transaction request and returns
/// the EIP-2718 encoded bytes, ready for `eth_sendRawTransaction`.
pub type SignerFn = Arc<
    dyn Fn(TransactionRequest) -> Pin<Box<dyn Future<Output = eyre::Result<Bytes>> + Send>>
        + Send
        + Sync,
>;

/// The account a transaction is sent from, and how to sign for it.
#[derive(Clone)]
pub struct TxSigner {
    address: Address,
    sign: SignerFn,
}

impl TxSigner {
    /// Wrap an arbitrary signing function for `address`.
    pub fn new(address: Address, sign: SignerFn) -> Self {
        Self { address, sign }
    }

    /// Sign locally with a hex private key (with or without 0x prefix).
    pub fn local(private_key: &str) -> Result<Self, ClientError> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| ClientError::InvalidPrivateKey(format!("{}", e)))?;
        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let sign: SignerFn = Arc::new(move |tx: TransactionRequest| {
            let wallet = wallet.clone();
            Box::pin(async move {
                let envelope: TxEnvelope = tx
                    .build(&wallet)
                    .await
                    .map_err(|e| eyre::eyre!("{}", e))?;

                let mut encoded = Vec::new();
                envelope.encode_2718(&mut encoded);
                Ok(Bytes::from(encoded))
            })
        });

        Ok(Self { address, sign })
    }

    /// Delegate signing to a signer-proxy service.
    pub fn remote(remote: RemoteSigner) -> Self {
        let address = remote.address();
        let sign: SignerFn = Arc::new(move |tx: TransactionRequest| {
            let remote = remote.clone();
            Box::pin(async move { remote.sign_transaction(tx).await })
        });

        Self { address, sign }
    }

    /// Sending address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Sign `tx`. The request must already carry nonce, gas, fees and chain id.
    pub async fn sign(&self, tx: TransactionRequest) -> eyre::Result<Bytes> {
        (self.sign)(tx).await
    }
}

impl fmt::Debug for TxSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
