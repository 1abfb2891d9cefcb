// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract calls.
//!
//! Only the two views the balance engine needs: `balanceOf` and `decimals`.
//! Both are ABI-encoded `eth_call`s issued through the endpoint's provider;
//! the caller owns normalization and caching.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::RpcError;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address who) external view returns (uint256);
        function decimals() external view returns (uint8);
    }
}

/// ERC-20 contract bound to one provider (one RPC endpoint).
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    pub fn new(provider: &P, contract_address: Address) -> Self {
        Self {
            contract: IERC20::new(contract_address, provider.clone()),
        }
    }

    /// Raw token balance of `holder` in the token's smallest unit.
    pub async fn balance_of(&self, holder: Address) -> Result<U256, RpcError> {
        self.contract
            .balanceOf(holder)
            .call()
            .await
            .map_err(|e| RpcError::Unavailable(e.to_string()))
    }

    /// Decimals the contract reports. Immutable for the life of a contract,
    /// so callers may cache the result per (endpoint, contract).
    pub async fn decimals(&self) -> Result<u8, RpcError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| RpcError::Unavailable(e.to_string()))
    }
}
