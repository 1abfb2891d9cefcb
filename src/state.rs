// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared application state.

use std::sync::Arc;

use jsonwebtoken::DecodingKey;
use tracing::warn;

use crate::balances::BalanceAggregator;
use crate::blockchain::EvmRpc;
use crate::config::JWT_SECRET_ENV;
use crate::pricing::PriceOracle;
use crate::store::WalletStore;

/// The aggregator wired to production implementations.
pub type Aggregator = BalanceAggregator<EvmRpc, PriceOracle, WalletStore>;

/// Token verification configuration.
#[derive(Clone)]
pub struct AuthConfig {
    decoding: DecodingKey,
}

impl AuthConfig {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Read the shared secret from `JWT_SECRET`. Without it, a random
    /// secret is generated and every presented token will fail to verify.
    pub fn from_env() -> Self {
        match std::env::var(JWT_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => Self::new(secret.as_bytes()),
            _ => {
                warn!("JWT_SECRET is not set; generated a random secret, all tokens will be rejected");
                Self::new(uuid::Uuid::new_v4().to_string().as_bytes())
            }
        }
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub wallets: Arc<WalletStore>,
    pub aggregator: Arc<Aggregator>,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(wallets: Arc<WalletStore>, aggregator: Aggregator, auth: AuthConfig) -> Self {
        Self {
            wallets,
            aggregator: Arc::new(aggregator),
            auth,
        }
    }

    /// State with an empty wallet directory and a price feed pointing at a
    /// closed local port. Requests that reach the network are test bugs.
    #[cfg(test)]
    pub fn for_tests(secret: &[u8]) -> Self {
        use std::time::Duration;

        use crate::balances::ChainBalanceFetcher;

        let wallets = Arc::new(WalletStore::new());
        let fetcher = ChainBalanceFetcher::new(EvmRpc::new(), Duration::from_secs(1));
        let prices = PriceOracle::new("http://127.0.0.1:9").unwrap();
        let aggregator = BalanceAggregator::new(fetcher, prices, Arc::clone(&wallets), 4);

        Self::new(wallets, aggregator, AuthConfig::new(secret))
    }
}
