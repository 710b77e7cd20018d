use crate::TxSigner;
use alloy_rpc_types::TransactionRequest;

/// Optional overrides for a state-changing call.
///
/// Every field left as `None` is filled by the runtime: nonce and gas are
/// estimated against the node, fees follow EIP-1559 unless a legacy
/// `gas_price` is given.
#[derive(Debug, Clone, Default)]
pub struct TransactionParameters {
    /// Gas limit
    pub gas_limit: Option<u64>,
    /// Legacy gas price (wei)
    pub gas_price: Option<u128>,
    /// EIP-1559 max fee per gas (wei)
    pub max_fee_per_gas: Option<u128>,
    /// EIP-1559 max priority fee per gas (wei)
    pub max_priority_fee_per_gas: Option<u128>,
    /// Signer used instead of the facade's default one
    pub signer: Option<TxSigner>,
}

impl TransactionParameters {
    pub const fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub const fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    pub const fn with_max_fee_per_gas(mut self, max_fee_per_gas: u128) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self
    }

    pub const fn with_max_priority_fee_per_gas(mut self, max_priority_fee_per_gas: u128) -> Self {
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    pub fn with_signer(mut self, signer: TxSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Copy the gas and fee overrides onto `tx`. The signer is not touched.
    pub fn apply(&self, tx: &mut TransactionRequest) {
        if let Some(gas) = self.gas_limit {
            tx.gas = Some(gas);
        }
        if let Some(gas_price) = self.gas_price {
            tx.gas_price = Some(gas_price);
        }
        if let Some(max_fee) = self.max_fee_per_gas {
            tx.max_fee_per_gas = Some(max_fee);
        }
        if let Some(priority_fee) = self.max_priority_fee_per_gas {
            tx.max_priority_fee_per_gas = Some(priority_fee);
        }
    }
}
