use crate::{
    cache::{get_or_fetch, MetadataCache},
    metrics::Metrics,
    units, IntoAddress, TokenError,
};
use alloy_primitives::{Address, TxHash, U256};
use alloy_rpc_types::Filter;
use alloy_sol_types::{SolCall, SolEvent};
use bigdecimal::BigDecimal;
use binding::token::ERC20;
use client::{ContractRuntime, FunctionDescriptor, TransactionParameters, TxSigner};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Snapshot of a token's metadata and supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token contract address
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Total supply in base units
    pub total_supply: U256,
}

impl TokenInfo {
    /// Total supply in display units.
    pub fn total_supply_display(&self) -> BigDecimal {
        units::to_display_units(self.total_supply, self.decimals)
    }
}

/// Typed ERC20 facade over a [`ContractRuntime`], bound to one token contract.
///
/// `name`, `symbol` and `decimals` are read once and cached for the lifetime
/// of the client; everything else is read from the chain on every call.
/// Reuse one client per token so the cache pays off.
#[derive(Debug)]
pub struct TokenClient<R> {
    runtime: R,
    address: Address,
    signer: Option<TxSigner>,
    metadata: MetadataCache,
    metrics: Metrics,
}

impl<R> TokenClient<R>
where
    R: ContractRuntime,
{
    /// Bind `runtime` to the token at `address`.
    pub fn new(runtime: R, address: impl IntoAddress) -> Result<Self, TokenError> {
        Ok(Self {
            runtime,
            address: address.into_address()?,
            signer: None,
            metadata: MetadataCache::default(),
            metrics: Metrics::new(),
        })
    }

    /// Default signer for write operations.
    pub fn with_signer(mut self, signer: TxSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn runtime(&self) -> &R {
        &self.runtime
    }

    pub const fn signer(&self) -> Option<&TxSigner> {
        self.signer.as_ref()
    }

    // ------------------------------------------------------------------ events

    /// Log filter matching this token's `Approval` events.
    pub fn approval_events(&self) -> Filter {
        Filter::new()
            .address(self.address)
            .event_signature(ERC20::Approval::SIGNATURE_HASH)
    }

    /// Log filter matching this token's `Transfer` events.
    pub fn transfer_events(&self) -> Filter {
        Filter::new()
            .address(self.address)
            .event_signature(ERC20::Transfer::SIGNATURE_HASH)
    }

    // ------------------------------------------------------- cached metadata

    pub fn name_descriptor(&self) -> FunctionDescriptor {
        self.descriptor(&ERC20::nameCall {})
    }

    /// Token name. Read from the chain once, then served from the cache.
    pub async fn name(&self) -> Result<&str, TokenError> {
        let name = get_or_fetch(&self.metadata.name, "name", &self.metrics, || {
            self.execute::<ERC20::nameCall>(self.name_descriptor())
        })
        .await?;

        Ok(name.as_str())
    }

    pub fn symbol_descriptor(&self) -> FunctionDescriptor {
        self.descriptor(&ERC20::symbolCall {})
    }

    /// Token symbol. Read from the chain once, then served from the cache.
    pub async fn symbol(&self) -> Result<&str, TokenError> {
        let symbol = get_or_fetch(&self.metadata.symbol, "symbol", &self.metrics, || {
            self.execute::<ERC20::symbolCall>(self.symbol_descriptor())
        })
        .await?;

        Ok(symbol.as_str())
    }

    pub fn decimals_descriptor(&self) -> FunctionDescriptor {
        self.descriptor(&ERC20::decimalsCall {})
    }

    /// Token decimals. Read from the chain once, then served from the cache.
    pub async fn decimals(&self) -> Result<u8, TokenError> {
        let decimals = get_or_fetch(&self.metadata.decimals, "decimals", &self.metrics, || {
            self.execute::<ERC20::decimalsCall>(self.decimals_descriptor())
        })
        .await?;

        Ok(*decimals)
    }

    /// Metadata plus the live total supply, read concurrently.
    pub async fn info(&self) -> Result<TokenInfo, TokenError> {
        let (name, symbol, decimals, total_supply) = tokio::try_join!(
            self.name(),
            self.symbol(),
            self.decimals(),
            self.total_supply()
        )?;

        Ok(TokenInfo {
            address: self.address,
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            total_supply,
        })
    }

    // ------------------------------------------------------------ live state

    #[doc(alias = "totalSupply")]
    pub fn total_supply_descriptor(&self) -> FunctionDescriptor {
        self.descriptor(&ERC20::totalSupplyCall {})
    }

    /// Total supply in base units.
    #[doc(alias = "totalSupply")]
    pub async fn total_supply(&self) -> Result<U256, TokenError> {
        self.execute::<ERC20::totalSupplyCall>(self.total_supply_descriptor())
            .await
    }

    #[doc(alias = "balanceOf")]
    pub fn balance_of_descriptor(
        &self,
        account: impl IntoAddress,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::balanceOfCall {
            account: account.into_address()?,
        }))
    }

    /// Balance of `account` in base units.
    #[doc(alias = "balanceOf")]
    pub async fn balance_of(&self, account: impl IntoAddress) -> Result<U256, TokenError> {
        let descriptor = self.balance_of_descriptor(account)?;
        self.execute::<ERC20::balanceOfCall>(descriptor).await
    }

    pub fn allowance_descriptor(
        &self,
        owner: impl IntoAddress,
        spender: impl IntoAddress,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::allowanceCall {
            owner: owner.into_address()?,
            spender: spender.into_address()?,
        }))
    }

    /// Amount `spender` may still move on behalf of `owner`, in base units.
    pub async fn allowance(
        &self,
        owner: impl IntoAddress,
        spender: impl IntoAddress,
    ) -> Result<U256, TokenError> {
        let descriptor = self.allowance_descriptor(owner, spender)?;
        self.execute::<ERC20::allowanceCall>(descriptor).await
    }

    pub fn owner_descriptor(&self) -> FunctionDescriptor {
        self.descriptor(&ERC20::ownerCall {})
    }

    /// Current owner of an Ownable token.
    pub async fn owner(&self) -> Result<Address, TokenError> {
        self.execute::<ERC20::ownerCall>(self.owner_descriptor())
            .await
    }

    // ---------------------------------------------------------------- writes

    pub fn approve_descriptor(
        &self,
        spender: impl IntoAddress,
        amount: U256,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::approveCall {
            spender: spender.into_address()?,
            amount,
        }))
    }

    /// Set the allowance of `spender` to `amount` base units.
    pub async fn approve(
        &self,
        spender: impl IntoAddress,
        amount: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let descriptor = self.approve_descriptor(spender, amount)?;
        self.submit(descriptor, params).await
    }

    pub fn transfer_descriptor(
        &self,
        recipient: impl IntoAddress,
        amount: U256,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::transferCall {
            recipient: recipient.into_address()?,
            amount,
        }))
    }

    /// Send `amount` base units to `recipient`.
    pub async fn transfer(
        &self,
        recipient: impl IntoAddress,
        amount: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let descriptor = self.transfer_descriptor(recipient, amount)?;
        self.submit(descriptor, params).await
    }

    #[doc(alias = "transferFrom")]
    pub fn transfer_from_descriptor(
        &self,
        sender: impl IntoAddress,
        recipient: impl IntoAddress,
        amount: U256,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::transferFromCall {
            sender: sender.into_address()?,
            recipient: recipient.into_address()?,
            amount,
        }))
    }

    /// Move `amount` base units from `sender` to `recipient` using the
    /// signer's allowance.
    #[doc(alias = "transferFrom")]
    pub async fn transfer_from(
        &self,
        sender: impl IntoAddress,
        recipient: impl IntoAddress,
        amount: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let descriptor = self.transfer_from_descriptor(sender, recipient, amount)?;
        self.submit(descriptor, params).await
    }

    #[doc(alias = "increaseAllowance")]
    pub fn increase_allowance_descriptor(
        &self,
        spender: impl IntoAddress,
        added_value: U256,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::increaseAllowanceCall {
            spender: spender.into_address()?,
            addedValue: added_value,
        }))
    }

    #[doc(alias = "increaseAllowance")]
    pub async fn increase_allowance(
        &self,
        spender: impl IntoAddress,
        added_value: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let descriptor = self.increase_allowance_descriptor(spender, added_value)?;
        self.submit(descriptor, params).await
    }

    #[doc(alias = "decreaseAllowance")]
    pub fn decrease_allowance_descriptor(
        &self,
        spender: impl IntoAddress,
        subtracted_value: U256,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::decreaseAllowanceCall {
            spender: spender.into_address()?,
            subtractedValue: subtracted_value,
        }))
    }

    #[doc(alias = "decreaseAllowance")]
    pub async fn decrease_allowance(
        &self,
        spender: impl IntoAddress,
        subtracted_value: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let descriptor = self.decrease_allowance_descriptor(spender, subtracted_value)?;
        self.submit(descriptor, params).await
    }

    #[doc(alias = "renounceOwnership")]
    pub fn renounce_ownership_descriptor(&self) -> FunctionDescriptor {
        self.descriptor(&ERC20::renounceOwnershipCall {})
    }

    #[doc(alias = "renounceOwnership")]
    pub async fn renounce_ownership(
        &self,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        self.submit(self.renounce_ownership_descriptor(), params)
            .await
    }

    #[doc(alias = "transferOwnership")]
    pub fn transfer_ownership_descriptor(
        &self,
        new_owner: impl IntoAddress,
    ) -> Result<FunctionDescriptor, TokenError> {
        Ok(self.descriptor(&ERC20::transferOwnershipCall {
            newOwner: new_owner.into_address()?,
        }))
    }

    #[doc(alias = "transferOwnership")]
    pub async fn transfer_ownership(
        &self,
        new_owner: impl IntoAddress,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let descriptor = self.transfer_ownership_descriptor(new_owner)?;
        self.submit(descriptor, params).await
    }

    // ----------------------------------------------------------------- units

    /// Display amount to base units, using this token's decimals.
    pub async fn to_base_units(&self, amount: &BigDecimal) -> Result<U256, TokenError> {
        let decimals = self.decimals().await?;
        Ok(units::to_base_units(amount, decimals)?)
    }

    /// Base units to display amount, using this token's decimals.
    pub async fn to_display_units(&self, amount: U256) -> Result<BigDecimal, TokenError> {
        let decimals = self.decimals().await?;
        Ok(units::to_display_units(amount, decimals))
    }

    /// `price_per_token * total_supply`, with the supply in base units.
    ///
    /// Without `total_supply` the live supply is read from the chain on every
    /// call; pass a known value when computing repeatedly.
    pub async fn market_cap(
        &self,
        price_per_token: &BigDecimal,
        total_supply: Option<U256>,
    ) -> Result<BigDecimal, TokenError> {
        let supply = match total_supply {
            Some(supply) => supply,
            None => self.total_supply().await?,
        };

        Ok(price_per_token.clone() * units::u256_to_decimal(supply))
    }

    /// [`market_cap`](Self::market_cap) divided by `10^decimals`.
    pub async fn market_cap_display(
        &self,
        price_per_token: &BigDecimal,
        total_supply: Option<U256>,
    ) -> Result<BigDecimal, TokenError> {
        let cap = self.market_cap(price_per_token, total_supply).await?;
        let decimals = self.decimals().await?;
        Ok(units::scale_down(&cap, decimals))
    }

    /// [`market_cap`](Self::market_cap) multiplied by `10^decimals`, truncated.
    pub async fn market_cap_base(
        &self,
        price_per_token: &BigDecimal,
        total_supply: Option<U256>,
    ) -> Result<U256, TokenError> {
        let cap = self.market_cap(price_per_token, total_supply).await?;
        let decimals = self.decimals().await?;
        Ok(units::to_base_units(&cap, decimals)?)
    }

    // ------------------------------------------------------------- internals

    fn descriptor<C: SolCall>(&self, call: &C) -> FunctionDescriptor {
        FunctionDescriptor::new(self.address, call)
    }

    /// Run a read and decode its output as `C`'s return type.
    ///
    /// Decoding is strict: a word with bits outside the declared type is a
    /// `Decode` error, not a truncated value.
    async fn execute<C: SolCall>(
        &self,
        descriptor: FunctionDescriptor,
    ) -> Result<C::Return, TokenError> {
        let method = descriptor.method();
        debug!(token = %self.address, method, "Reading contract");

        self.metrics.record_read(method);
        let output = match self.runtime.call(&descriptor).await {
            Ok(output) => output,
            Err(source) => {
                self.metrics.record_read_failure(method);
                return Err(TokenError::Execution { method, source });
            }
        };

        C::abi_decode_returns_validate(&output).map_err(|source| TokenError::Decode { method, source })
    }

    /// Sign and broadcast `descriptor`. Resolves once the node accepted it.
    async fn submit(
        &self,
        descriptor: FunctionDescriptor,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        let method = descriptor.method();
        let signer = params
            .signer
            .as_ref()
            .or(self.signer.as_ref())
            .ok_or(TokenError::MissingSigner { method })?;

        info!(token = %self.address, method, from = %signer.address(), "Submitting transaction");

        match self
            .runtime
            .send_transaction(&descriptor, &params, signer)
            .await
        {
            Ok(tx_hash) => {
                self.metrics.record_submission(method);
                info!(token = %self.address, method, %tx_hash, "Transaction submitted");
                Ok(tx_hash)
            }
            Err(source) => {
                self.metrics.record_submission_failure(method);
                warn!(token = %self.address, method, error = %source, "Transaction submission failed");
                Err(TokenError::Submission { method, source })
            }
        }
    }
}
