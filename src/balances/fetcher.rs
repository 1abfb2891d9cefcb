// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-(wallet, chain) balance collection with RPC endpoint failover.
//!
//! ## Failover contract
//!
//! Endpoints are tried in the order the catalog declares them. The first
//! endpoint that answers the activity probe serves the *entire* unit: native
//! balance plus every configured stablecoin. If an endpoint fails at any
//! step, the whole sequence restarts on the next endpoint - partial results
//! from a failed endpoint are never mixed with another node's view. A probe
//! that succeeds with a zero transaction count resolves the unit to
//! [`ChainActivity::Inactive`] immediately, with no further RPC calls.
//!
//! Each endpoint attempt runs under a timeout; expiry counts as an endpoint
//! failure and advances the failover loop.

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

use alloy::primitives::Address;
use lru::LruCache;
use tracing::{error, warn};

use crate::blockchain::{Amount, NodeRpc, RpcError};
use crate::chains::{Chain, NATIVE_DECIMALS};

/// Entries kept in the per-process (endpoint, contract) -> decimals cache.
/// Contract decimals are immutable, so entries never expire.
const DECIMALS_CACHE_CAP: NonZeroUsize = NonZeroUsize::new(256).unwrap();

/// Default per-endpoint attempt timeout.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Balances one endpoint reported for an active wallet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnchainBalances {
    pub native: Amount,
    pub usdt: Option<Amount>,
    pub usdc: Option<Amount>,
}

/// Outcome of probing one (wallet, chain) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainActivity {
    /// The wallet has never transacted on this chain. Not an error; the
    /// pair simply yields no result entry.
    Inactive,
    /// The wallet is active and these balances were read from one endpoint.
    Active(OnchainBalances),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("All RPC endpoints failed for chain {chain}")]
    AllEndpointsFailed { chain: &'static str },
}

/// Collects balances for one (wallet, chain) pair at a time.
pub struct ChainBalanceFetcher<R> {
    rpc: R,
    attempt_timeout: Duration,
    decimals_cache: Mutex<LruCache<(String, Address), u8>>,
}

impl<R: NodeRpc> ChainBalanceFetcher<R> {
    pub fn new(rpc: R, attempt_timeout: Duration) -> Self {
        Self {
            rpc,
            attempt_timeout,
            decimals_cache: Mutex::new(LruCache::new(DECIMALS_CACHE_CAP)),
        }
    }

    #[cfg(test)]
    pub(crate) fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Resolve one (wallet, chain) pair, failing over across endpoints.
    pub async fn fetch(
        &self,
        wallet: Address,
        chain: &'static Chain,
    ) -> Result<ChainActivity, FetchError> {
        for endpoint in chain.rpc_endpoints {
            match tokio::time::timeout(
                self.attempt_timeout,
                self.try_endpoint(endpoint, wallet, chain),
            )
            .await
            {
                Ok(Ok(activity)) => return Ok(activity),
                Ok(Err(err)) => {
                    warn!(
                        chain = chain.name,
                        endpoint,
                        wallet = %wallet,
                        error = %err,
                        "RPC endpoint failed, trying next"
                    );
                }
                Err(_) => {
                    warn!(
                        chain = chain.name,
                        endpoint,
                        wallet = %wallet,
                        timeout_secs = self.attempt_timeout.as_secs(),
                        "RPC endpoint timed out, trying next"
                    );
                }
            }
        }

        Err(FetchError::AllEndpointsFailed { chain: chain.name })
    }

    /// Run the full probe + balance sequence against a single endpoint.
    async fn try_endpoint(
        &self,
        endpoint: &str,
        wallet: Address,
        chain: &'static Chain,
    ) -> Result<ChainActivity, RpcError> {
        if self.rpc.transaction_count(endpoint, wallet).await? == 0 {
            return Ok(ChainActivity::Inactive);
        }

        let native_raw = self.rpc.native_balance(endpoint, wallet).await?;
        let native = Amount::from_raw(native_raw, NATIVE_DECIMALS);

        let usdt = match chain.usdt_contract.and_then(|c| parse_contract(chain, c)) {
            Some(token) => Some(self.token_amount(endpoint, token, wallet).await?),
            None => None,
        };

        let usdc = match chain.usdc_contract.and_then(|c| parse_contract(chain, c)) {
            Some(token) => Some(self.token_amount(endpoint, token, wallet).await?),
            None => None,
        };

        Ok(ChainActivity::Active(OnchainBalances { native, usdt, usdc }))
    }

    /// Normalized token balance: `balanceOf` plus (cached) `decimals`.
    async fn token_amount(
        &self,
        endpoint: &str,
        token: Address,
        holder: Address,
    ) -> Result<Amount, RpcError> {
        let raw = self.rpc.token_balance(endpoint, token, holder).await?;
        let decimals = self.cached_decimals(endpoint, token).await?;
        Ok(Amount::from_raw(raw, decimals))
    }

    async fn cached_decimals(&self, endpoint: &str, token: Address) -> Result<u8, RpcError> {
        let key = (endpoint.to_string(), token);

        if let Ok(mut cache) = self.decimals_cache.lock() {
            if let Some(decimals) = cache.get(&key) {
                return Ok(*decimals);
            }
        }

        let decimals = self.rpc.token_decimals(endpoint, token).await?;

        if let Ok(mut cache) = self.decimals_cache.lock() {
            cache.put(key, decimals);
        }

        Ok(decimals)
    }
}

/// Contract addresses come from the static catalog, so a parse failure is a
/// catalog bug; log it and treat the token as unconfigured.
fn parse_contract(chain: &Chain, contract: &str) -> Option<Address> {
    match Address::from_str(contract) {
        Ok(address) => Some(address),
        Err(err) => {
            error!(
                chain = chain.name,
                contract,
                error = %err,
                "Malformed stablecoin contract address in chain catalog"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use alloy::primitives::U256;

    use super::*;

    static TWO_ENDPOINT_CHAIN: Chain = Chain {
        name: "Testnet",
        currency: "TST",
        rpc_endpoints: &["https://rpc-a.test", "https://rpc-b.test"],
        usdt_contract: Some("0x9702230A8Ea53601f5cD2dc00fDBc13d4dF4A8c7"),
        usdc_contract: None,
        logo: "/static/chains/testnet.png",
    };

    /// Scripted `NodeRpc` that records every call as `"<op>@<endpoint>"`.
    #[derive(Default)]
    struct ScriptedRpc {
        failing_endpoints: HashSet<String>,
        hanging_endpoints: HashSet<String>,
        tx_count: u64,
        native_raw: U256,
        token_raw: U256,
        decimals: u8,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRpc {
        fn record(&self, op: &str, endpoint: &str) -> Result<(), RpcError> {
            self.calls.lock().unwrap().push(format!("{op}@{endpoint}"));
            if self.failing_endpoints.contains(endpoint) {
                return Err(RpcError::Unavailable("connection refused".into()));
            }
            Ok(())
        }

        async fn hang_if_scripted(&self, endpoint: &str) {
            if self.hanging_endpoints.contains(endpoint) {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl NodeRpc for ScriptedRpc {
        async fn transaction_count(
            &self,
            endpoint: &str,
            _address: Address,
        ) -> Result<u64, RpcError> {
            self.record("tx_count", endpoint)?;
            self.hang_if_scripted(endpoint).await;
            Ok(self.tx_count)
        }

        async fn native_balance(
            &self,
            endpoint: &str,
            _address: Address,
        ) -> Result<U256, RpcError> {
            self.record("native", endpoint)?;
            Ok(self.native_raw)
        }

        async fn token_balance(
            &self,
            endpoint: &str,
            _token: Address,
            _holder: Address,
        ) -> Result<U256, RpcError> {
            self.record("token_balance", endpoint)?;
            Ok(self.token_raw)
        }

        async fn token_decimals(&self, endpoint: &str, _token: Address) -> Result<u8, RpcError> {
            self.record("token_decimals", endpoint)?;
            Ok(self.decimals)
        }
    }

    fn wallet() -> Address {
        "0x1234567890123456789012345678901234567890"
            .parse()
            .unwrap()
    }

    fn fetcher(rpc: ScriptedRpc) -> ChainBalanceFetcher<ScriptedRpc> {
        ChainBalanceFetcher::new(rpc, DEFAULT_ATTEMPT_TIMEOUT)
    }

    #[tokio::test]
    async fn zero_probe_short_circuits_without_further_calls() {
        let fetcher = fetcher(ScriptedRpc {
            tx_count: 0,
            ..Default::default()
        });

        let activity = fetcher.fetch(wallet(), &TWO_ENDPOINT_CHAIN).await.unwrap();
        assert_eq!(activity, ChainActivity::Inactive);

        // Exactly one call: the probe against the first endpoint.
        assert_eq!(fetcher.rpc.calls(), vec!["tx_count@https://rpc-a.test"]);
    }

    #[tokio::test]
    async fn failed_endpoint_falls_over_without_mixing_sources() {
        let fetcher = fetcher(ScriptedRpc {
            failing_endpoints: HashSet::from(["https://rpc-a.test".to_string()]),
            tx_count: 7,
            native_raw: U256::from(2_000_000_000_000_000_000u128),
            token_raw: U256::from(1_000_000u64),
            decimals: 6,
            ..Default::default()
        });

        let activity = fetcher.fetch(wallet(), &TWO_ENDPOINT_CHAIN).await.unwrap();
        assert_eq!(
            activity,
            ChainActivity::Active(OnchainBalances {
                native: Amount::Whole(2),
                usdt: Some(Amount::Whole(1)),
                usdc: None,
            })
        );

        let calls = fetcher.rpc.calls();
        // First endpoint saw only the failed probe; everything else came
        // from the second endpoint.
        assert_eq!(calls[0], "tx_count@https://rpc-a.test");
        assert!(calls[1..].iter().all(|c| c.ends_with("@https://rpc-b.test")));
    }

    #[tokio::test]
    async fn exhausting_all_endpoints_is_an_error() {
        let fetcher = fetcher(ScriptedRpc {
            failing_endpoints: HashSet::from([
                "https://rpc-a.test".to_string(),
                "https://rpc-b.test".to_string(),
            ]),
            tx_count: 1,
            ..Default::default()
        });

        let result = fetcher.fetch(wallet(), &TWO_ENDPOINT_CHAIN).await;
        assert!(matches!(
            result,
            Err(FetchError::AllEndpointsFailed { chain: "Testnet" })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_endpoint_times_out_and_falls_over() {
        let fetcher = ChainBalanceFetcher::new(
            ScriptedRpc {
                hanging_endpoints: HashSet::from(["https://rpc-a.test".to_string()]),
                tx_count: 3,
                native_raw: U256::from(1_000_000_000_000_000_000u128),
                token_raw: U256::from(500_000u64),
                decimals: 6,
                ..Default::default()
            },
            Duration::from_secs(5),
        );

        let activity = fetcher.fetch(wallet(), &TWO_ENDPOINT_CHAIN).await.unwrap();
        assert!(matches!(activity, ChainActivity::Active(_)));

        let calls = fetcher.rpc.calls();
        assert_eq!(calls[0], "tx_count@https://rpc-a.test");
        assert!(calls[1..].iter().all(|c| c.ends_with("@https://rpc-b.test")));
    }

    #[tokio::test]
    async fn token_decimals_are_cached_per_endpoint_and_contract() {
        let fetcher = fetcher(ScriptedRpc {
            tx_count: 2,
            token_raw: U256::from(42u64),
            decimals: 6,
            ..Default::default()
        });

        fetcher.fetch(wallet(), &TWO_ENDPOINT_CHAIN).await.unwrap();
        fetcher.fetch(wallet(), &TWO_ENDPOINT_CHAIN).await.unwrap();

        let decimals_calls = fetcher
            .rpc
            .calls()
            .iter()
            .filter(|c| c.starts_with("token_decimals"))
            .count();
        assert_eq!(decimals_calls, 1);
    }
}
