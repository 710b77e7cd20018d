use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, Selector};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::SolCall;

/// An encoded contract call that has not been executed.
///
/// Building a descriptor never touches the network. It can be handed to a
/// [`ContractRuntime`](crate::ContractRuntime) for execution or submission, or
/// turned into a plain [`TransactionRequest`] to batch, simulate or estimate
/// gas elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionDescriptor {
    to: Address,
    signature: &'static str,
    selector: Selector,
    input: Bytes,
}

impl FunctionDescriptor {
    /// Encode `call` against the contract at `to`.
    pub fn new<C: SolCall>(to: Address, call: &C) -> Self {
        Self {
            to,
            signature: C::SIGNATURE,
            selector: Selector::from(C::SELECTOR),
            input: Bytes::from(call.abi_encode()),
        }
    }

    /// Contract the call targets.
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Canonical signature, e.g. `balanceOf(address)`.
    pub const fn signature(&self) -> &'static str {
        self.signature
    }

    /// Function name without the parameter list.
    pub fn method(&self) -> &'static str {
        self.signature
            .split_once('(')
            .map_or(self.signature, |(name, _)| name)
    }

    pub const fn selector(&self) -> Selector {
        self.selector
    }

    /// ABI-encoded calldata, selector included.
    pub const fn input(&self) -> &Bytes {
        &self.input
    }

    /// Unsigned request carrying only `to` and calldata.
    pub fn to_transaction_request(&self) -> TransactionRequest {
        TransactionRequest::default()
            .with_to(self.to)
            .with_input(self.input.clone())
    }
}
