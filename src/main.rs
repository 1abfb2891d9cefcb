// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chainfolio_server::api::router;
use chainfolio_server::balances::{BalanceAggregator, ChainBalanceFetcher};
use chainfolio_server::blockchain::EvmRpc;
use chainfolio_server::config::{
    env_or_default, env_parsed_or, HOST_ENV, LOG_FORMAT_ENV, MAX_IN_FLIGHT_ENV, PORT_ENV,
    RPC_ATTEMPT_TIMEOUT_ENV, WALLETS_FILE_ENV,
};
use chainfolio_server::pricing::PriceOracle;
use chainfolio_server::state::{AppState, AuthConfig};
use chainfolio_server::store::WalletStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if env_or_default(LOG_FORMAT_ENV, "pretty") == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
    token.cancel();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let wallets = match std::env::var(WALLETS_FILE_ENV) {
        Ok(path) => Arc::new(WalletStore::load_file(&path)?),
        Err(_) => {
            info!("WALLETS_FILE not set, starting with an empty wallet directory");
            Arc::new(WalletStore::new())
        }
    };

    let attempt_timeout = Duration::from_secs(env_parsed_or(RPC_ATTEMPT_TIMEOUT_ENV, 10));
    let fetcher = ChainBalanceFetcher::new(EvmRpc::new(), attempt_timeout);
    let prices = PriceOracle::from_env()?;
    let max_in_flight = env_parsed_or(MAX_IN_FLIGHT_ENV, 16);
    let aggregator = BalanceAggregator::new(fetcher, prices, Arc::clone(&wallets), max_in_flight);

    let state = AppState::new(wallets, aggregator, AuthConfig::from_env());
    let app = router(state);

    let host = env_or_default(HOST_ENV, "0.0.0.0");
    let port: u16 = env_parsed_or(PORT_ENV, 8080);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Chainfolio server listening on http://{addr} (docs at /docs)");

    let token = CancellationToken::new();
    tokio::spawn(shutdown_signal(token.clone()));

    let shutdown = token.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}
