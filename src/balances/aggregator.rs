// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Concurrent fan-out over (wallet x selected chain) pairs.
//!
//! ## Batch semantics
//!
//! Every pair is an independent unit of work: fetch balances with endpoint
//! failover, then price the native balance in USD. Units run concurrently
//! under a semaphore bound so large wallet sets cannot exhaust outbound
//! connections against public RPC providers. The batch waits for all units
//! to settle; a unit that turns out inactive, exhausts its endpoints, or
//! fails its price lookup contributes nothing and never fails the batch.
//! Dropping the returned future (caller disconnect) aborts all in-flight
//! units with it.
//!
//! The result list carries no ordering contract.

use std::future::Future;
use std::sync::Arc;

use alloy::primitives::Address;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::chains::{self, Chain};
use crate::models::{ChainBalanceEntry, WalletBalance};
use crate::pricing::PriceSource;

use super::fetcher::{ChainActivity, ChainBalanceFetcher};
use crate::blockchain::NodeRpc;

/// Default bound on concurrently running units.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    /// A selected chain name is not in the catalog. Rejects the whole
    /// request before any RPC work starts.
    #[error("Chain not found: {0}")]
    UnknownChain(String),
}

/// Read-only view of a user's registered wallet addresses.
pub trait WalletDirectory: Send + Sync + 'static {
    fn wallets_for_user(&self, user_id: &str) -> impl Future<Output = Vec<Address>> + Send;
}

/// Orchestrates the full balance batch for one request.
pub struct BalanceAggregator<R, P, D> {
    fetcher: Arc<ChainBalanceFetcher<R>>,
    prices: Arc<P>,
    directory: Arc<D>,
    max_in_flight: usize,
}

impl<R, P, D> BalanceAggregator<R, P, D>
where
    R: NodeRpc,
    P: PriceSource,
    D: WalletDirectory,
{
    pub fn new(
        fetcher: ChainBalanceFetcher<R>,
        prices: P,
        directory: Arc<D>,
        max_in_flight: usize,
    ) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            prices: Arc::new(prices),
            directory,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// Resolve balances for every (wallet, selected chain) pair.
    ///
    /// Fails fast on an unknown chain name; otherwise always succeeds with
    /// a (possibly empty or partial) list.
    pub async fn wallet_balances(
        &self,
        user_id: &str,
        selected_chains: &[String],
    ) -> Result<Vec<ChainBalanceEntry>, BalanceError> {
        let mut chains = Vec::with_capacity(selected_chains.len());
        for name in selected_chains {
            let chain =
                chains::lookup(name).ok_or_else(|| BalanceError::UnknownChain(name.clone()))?;
            chains.push(chain);
        }

        let wallets = self.directory.wallets_for_user(user_id).await;
        if wallets.is_empty() {
            debug!(user_id, "No wallets registered, returning empty batch");
            return Ok(Vec::new());
        }

        let semaphore = Arc::new(Semaphore::new(self.max_in_flight));
        let mut units = JoinSet::new();

        for wallet in wallets {
            for chain in &chains {
                let chain: &'static Chain = *chain;
                let fetcher = Arc::clone(&self.fetcher);
                let prices = Arc::clone(&self.prices);
                let semaphore = Arc::clone(&semaphore);

                units.spawn(async move {
                    let Ok(_permit) = semaphore.acquire_owned().await else {
                        return None;
                    };
                    resolve_unit(&fetcher, prices.as_ref(), wallet, chain).await
                });
            }
        }

        let mut entries = Vec::new();
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "Balance unit task failed to join"),
            }
        }

        Ok(entries)
    }
}

/// One unit: fetch on-chain balances, then price them. Any terminal
/// failure resolves to `None` and is invisible to sibling units.
async fn resolve_unit<R: NodeRpc, P: PriceSource>(
    fetcher: &ChainBalanceFetcher<R>,
    prices: &P,
    wallet: Address,
    chain: &'static Chain,
) -> Option<ChainBalanceEntry> {
    let activity = match fetcher.fetch(wallet, chain).await {
        Ok(activity) => activity,
        Err(err) => {
            warn!(chain = chain.name, wallet = %wallet, error = %err, "Dropping pair");
            return None;
        }
    };

    let balances = match activity {
        ChainActivity::Inactive => {
            debug!(chain = chain.name, wallet = %wallet, "No on-chain activity, skipping");
            return None;
        }
        ChainActivity::Active(balances) => balances,
    };

    let usd_price = match prices.usd_price(chain.currency).await {
        Ok(price) => price,
        Err(err) => {
            // A dead price feed must not take the rest of the batch with
            // it; only this pair is dropped.
            warn!(
                chain = chain.name,
                currency = chain.currency,
                wallet = %wallet,
                error = %err,
                "Price lookup failed, dropping pair"
            );
            return None;
        }
    };

    Some(ChainBalanceEntry {
        chain: chain.name.to_string(),
        balance: WalletBalance {
            address: wallet.to_checksum(None),
            native_balance: balances.native,
            native_in_usd: balances.native.usd_value(usd_price),
            usdt_balance: balances.usdt,
            usdc_balance: balances.usdc,
        },
    })
}
