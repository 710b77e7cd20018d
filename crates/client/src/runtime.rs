use crate::{BoxError, ClientError, FunctionDescriptor, TransactionParameters, TxSigner};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use std::future::Future;
use tracing::debug;

/// Read and submit capabilities a contract facade is written against.
///
/// Implementations perform no retries; errors are returned as raised by the
/// transport, the ABI layer or the signer.
pub trait ContractRuntime: Send + Sync {
    /// Execute a read-only call (`eth_call`) and return the raw return data.
    fn call(
        &self,
        descriptor: &FunctionDescriptor,
    ) -> impl Future<Output = Result<Bytes, BoxError>> + Send;

    /// Sign and broadcast a state-changing call.
    ///
    /// Resolves once the node accepted the transaction; it does not wait for
    /// the transaction to be mined.
    fn send_transaction(
        &self,
        descriptor: &FunctionDescriptor,
        params: &TransactionParameters,
        signer: &TxSigner,
    ) -> impl Future<Output = Result<TxHash, BoxError>> + Send;
}

/// [`ContractRuntime`] backed by an alloy provider.
#[derive(Debug, Clone)]
pub struct RpcRuntime<P> {
    provider: P,
    chain_id: u64,
}

impl<P> RpcRuntime<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, chain_id: u64) -> Self {
        Self { provider, chain_id }
    }

    /// Build a runtime, asking the node for its chain id.
    pub async fn connect(provider: P) -> Result<Self, ClientError> {
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| ClientError::Connection(format!("{}", e)))?;

        Ok(Self::new(provider, chain_id))
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

impl<P> ContractRuntime for RpcRuntime<P>
where
    P: Provider + Clone,
{
    async fn call(&self, descriptor: &FunctionDescriptor) -> Result<Bytes, BoxError> {
        let output = self
            .provider
            .call(descriptor.to_transaction_request())
            .await?;

        Ok(output)
    }

    async fn send_transaction(
        &self,
        descriptor: &FunctionDescriptor,
        params: &TransactionParameters,
        signer: &TxSigner,
    ) -> Result<TxHash, BoxError> {
        let mut tx = descriptor.to_transaction_request();
        params.apply(&mut tx);

        let tx = fill_transaction(tx, &self.provider, signer.address(), self.chain_id).await?;
        debug!(
            nonce = ?tx.nonce,
            gas = ?tx.gas,
            method = descriptor.method(),
            "Signing transaction"
        );

        let raw = signer.sign(tx).await?;
        let pending = self.provider.send_raw_transaction(&raw).await?;

        Ok(*pending.tx_hash())
    }
}

/// Fill missing transaction fields using the provider.
///
/// A legacy `gas_price` already on the request suppresses EIP-1559 fee
/// estimation.
pub async fn fill_transaction<P>(
    mut tx: TransactionRequest,
    provider: &P,
    from: Address,
    chain_id: u64,
) -> eyre::Result<TransactionRequest>
where
    P: Provider,
{
    let sender = *tx.from.get_or_insert(from);

    if tx.chain_id.is_none() {
        tx.chain_id = Some(chain_id);
    }

    if tx.nonce.is_none() {
        let nonce = provider.get_transaction_count(sender).await?;
        tx.nonce = Some(nonce);
    }

    // Fees before gas: estimation may depend on them.
    let legacy = tx.gas_price.is_some();
    if !legacy && (tx.max_fee_per_gas.is_none() || tx.max_priority_fee_per_gas.is_none()) {
        let fee_estimate = provider.estimate_eip1559_fees().await?;
        if tx.max_fee_per_gas.is_none() {
            tx.max_fee_per_gas = Some(fee_estimate.max_fee_per_gas);
        }
        if tx.max_priority_fee_per_gas.is_none() {
            tx.max_priority_fee_per_gas = Some(fee_estimate.max_priority_fee_per_gas);
        }
    }

    if tx.gas.is_none() {
        let gas_estimate = provider.estimate_gas(tx.clone()).await?;
        // 20% headroom
        tx.gas = Some(gas_estimate + gas_estimate / 5);
    }

    Ok(tx)
}
