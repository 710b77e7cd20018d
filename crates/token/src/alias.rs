//! ABI spellings of the token methods.
//!
//! Each alias forwards to the snake_case method, so both names always behave
//! the same.

use crate::{IntoAddress, TokenClient, TokenError};
use alloy_primitives::{TxHash, U256};
use client::{ContractRuntime, TransactionParameters};

#[allow(non_snake_case)]
impl<R> TokenClient<R>
where
    R: ContractRuntime,
{
    /// Alias of [`total_supply`](Self::total_supply).
    #[inline]
    pub async fn totalSupply(&self) -> Result<U256, TokenError> {
        self.total_supply().await
    }

    /// Alias of [`balance_of`](Self::balance_of).
    #[inline]
    pub async fn balanceOf(&self, account: impl IntoAddress) -> Result<U256, TokenError> {
        self.balance_of(account).await
    }

    /// Alias of [`transfer_from`](Self::transfer_from).
    #[inline]
    pub async fn transferFrom(
        &self,
        sender: impl IntoAddress,
        recipient: impl IntoAddress,
        amount: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        self.transfer_from(sender, recipient, amount, params).await
    }

    /// Alias of [`increase_allowance`](Self::increase_allowance).
    #[inline]
    pub async fn increaseAllowance(
        &self,
        spender: impl IntoAddress,
        added_value: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        self.increase_allowance(spender, added_value, params).await
    }

    /// Alias of [`decrease_allowance`](Self::decrease_allowance).
    #[inline]
    pub async fn decreaseAllowance(
        &self,
        spender: impl IntoAddress,
        subtracted_value: U256,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        self.decrease_allowance(spender, subtracted_value, params)
            .await
    }

    /// Alias of [`renounce_ownership`](Self::renounce_ownership).
    #[inline]
    pub async fn renounceOwnership(
        &self,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        self.renounce_ownership(params).await
    }

    /// Alias of [`transfer_ownership`](Self::transfer_ownership).
    #[inline]
    pub async fn transferOwnership(
        &self,
        new_owner: impl IntoAddress,
        params: TransactionParameters,
    ) -> Result<TxHash, TokenError> {
        self.transfer_ownership(new_owner, params).await
    }
}
