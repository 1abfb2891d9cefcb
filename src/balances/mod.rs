// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The balance engine: per-pair fetching with endpoint failover and the
//! bounded concurrent aggregator on top of it.

pub mod aggregator;
pub mod fetcher;

pub use aggregator::{BalanceAggregator, BalanceError, WalletDirectory, DEFAULT_MAX_IN_FLIGHT};
pub use fetcher::{ChainActivity, ChainBalanceFetcher, FetchError, DEFAULT_ATTEMPT_TIMEOUT};
