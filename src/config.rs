// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `JWT_SECRET` | HS256 secret for bearer tokens | Random per process (dev only) |
//! | `WALLETS_FILE` | JSON seed file for the wallet directory | Unset (empty directory) |
//! | `PRICE_FEED_URL` | Price feed base URL | `https://min-api.cryptocompare.com` |
//! | `BALANCE_MAX_IN_FLIGHT` | Concurrent (wallet, chain) units per batch | `16` |
//! | `RPC_ATTEMPT_TIMEOUT_SECS` | Per-endpoint attempt timeout | `10` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::fmt::Debug;
use std::str::FromStr;

/// Server bind address.
pub const HOST_ENV: &str = "HOST";

/// Server bind port.
pub const PORT_ENV: &str = "PORT";

/// HS256 secret used to validate bearer tokens. When unset, a random
/// per-process secret is generated and a warning is logged; externally
/// issued tokens will not validate in that mode.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Path to a JSON document seeding the wallet directory:
/// `{ "<user_id>": ["0x...", ...], ... }`.
pub const WALLETS_FILE_ENV: &str = "WALLETS_FILE";

/// Base URL of the cryptocompare-compatible price feed.
pub const PRICE_FEED_URL_ENV: &str = "PRICE_FEED_URL";

/// Bound on concurrently running (wallet, chain) units per batch.
pub const MAX_IN_FLIGHT_ENV: &str = "BALANCE_MAX_IN_FLIGHT";

/// Seconds allowed for one RPC endpoint attempt before failing over.
pub const RPC_ATTEMPT_TIMEOUT_ENV: &str = "RPC_ATTEMPT_TIMEOUT_SECS";

/// Logging format selector (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Read an environment variable, falling back to a default.
pub fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default on
/// absence or parse failure.
pub fn env_parsed_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Debug,
{
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_default_falls_back() {
        assert_eq!(
            env_or_default("CHAINFOLIO_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn env_parsed_or_falls_back_on_absence() {
        assert_eq!(env_parsed_or("CHAINFOLIO_TEST_UNSET_VAR", 42usize), 42);
    }
}
