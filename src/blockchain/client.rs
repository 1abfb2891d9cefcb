// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON-RPC node access for EVM chains.
//!
//! [`NodeRpc`] is the seam between the balance engine and the network: every
//! method targets one explicit endpoint URL, and every transport or decode
//! failure collapses into [`RpcError::Unavailable`] so the caller can fail
//! over to the next endpoint. [`EvmRpc`] is the production implementation on
//! top of alloy's HTTP provider; tests substitute their own `NodeRpc`.

use std::future::Future;

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
};

use super::erc20::Erc20Contract;

/// HTTP provider type (with all recommended fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Errors from a single RPC endpoint.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Invalid RPC URL: {0}")]
    InvalidEndpoint(String),

    #[error("RPC endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Node operations against one specific RPC endpoint.
pub trait NodeRpc: Send + Sync + 'static {
    /// `eth_getTransactionCount` - used as a cheap on-chain activity probe.
    fn transaction_count(
        &self,
        endpoint: &str,
        address: Address,
    ) -> impl Future<Output = Result<u64, RpcError>> + Send;

    /// `eth_getBalance` - native balance in the chain's smallest unit.
    fn native_balance(
        &self,
        endpoint: &str,
        address: Address,
    ) -> impl Future<Output = Result<U256, RpcError>> + Send;

    /// ERC-20 `balanceOf(holder)` in the token's smallest unit.
    fn token_balance(
        &self,
        endpoint: &str,
        token: Address,
        holder: Address,
    ) -> impl Future<Output = Result<U256, RpcError>> + Send;

    /// ERC-20 `decimals()`.
    fn token_decimals(
        &self,
        endpoint: &str,
        token: Address,
    ) -> impl Future<Output = Result<u8, RpcError>> + Send;
}

/// Production `NodeRpc` backed by alloy HTTP providers.
///
/// Providers are transient: each call builds a fresh one for its endpoint,
/// so concurrently running units never share connection state.
#[derive(Debug, Clone, Default)]
pub struct EvmRpc;

impl EvmRpc {
    pub fn new() -> Self {
        Self
    }

    fn provider(endpoint: &str) -> Result<HttpProvider, RpcError> {
        let url: url::Url = endpoint
            .parse()
            .map_err(|e: url::ParseError| RpcError::InvalidEndpoint(e.to_string()))?;

        Ok(ProviderBuilder::new().connect_http(url))
    }
}

impl NodeRpc for EvmRpc {
    async fn transaction_count(&self, endpoint: &str, address: Address) -> Result<u64, RpcError> {
        let provider = Self::provider(endpoint)?;
        provider
            .get_transaction_count(address)
            .await
            .map_err(|e| RpcError::Unavailable(e.to_string()))
    }

    async fn native_balance(&self, endpoint: &str, address: Address) -> Result<U256, RpcError> {
        let provider = Self::provider(endpoint)?;
        provider
            .get_balance(address)
            .await
            .map_err(|e| RpcError::Unavailable(e.to_string()))
    }

    async fn token_balance(
        &self,
        endpoint: &str,
        token: Address,
        holder: Address,
    ) -> Result<U256, RpcError> {
        let provider = Self::provider(endpoint)?;
        Erc20Contract::new(&provider, token).balance_of(holder).await
    }

    async fn token_decimals(&self, endpoint: &str, token: Address) -> Result<u8, RpcError> {
        let provider = Self::provider(endpoint)?;
        Erc20Contract::new(&provider, token).decimals().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_rejects_malformed_endpoint() {
        let result = EvmRpc::provider("not a url");
        assert!(matches!(result, Err(RpcError::InvalidEndpoint(_))));
    }

    #[test]
    fn provider_accepts_https_endpoint() {
        assert!(EvmRpc::provider("https://eth.llamarpc.com").is_ok());
    }
}
