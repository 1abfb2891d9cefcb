// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory wallet directory.
//!
//! The balance engine only needs one question answered: which addresses
//! belong to this user? Persistence is somebody else's job; this store is
//! seeded once at startup from an optional JSON file
//! (`{ "<user_id>": ["0x...", ...] }`) and addresses are parsed - and
//! thereby checksum-normalized - at load time.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use alloy::primitives::Address;
use tokio::sync::RwLock;
use tracing::info;

use crate::balances::WalletDirectory;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read wallets file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Wallets file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid wallet address {address:?} for user {user_id}: {reason}")]
    BadAddress {
        user_id: String,
        address: String,
        reason: String,
    },
}

/// Wallet addresses keyed by user id.
#[derive(Debug, Default)]
pub struct WalletStore {
    wallets: RwLock<HashMap<String, Vec<Address>>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON seed file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let seed: HashMap<String, Vec<String>> = serde_json::from_str(&raw)?;

        let mut wallets: HashMap<String, Vec<Address>> = HashMap::new();
        for (user_id, addresses) in seed {
            let mut parsed = Vec::with_capacity(addresses.len());
            for address in addresses {
                let address = Address::from_str(&address).map_err(|e| StoreError::BadAddress {
                    user_id: user_id.clone(),
                    address,
                    reason: e.to_string(),
                })?;
                if !parsed.contains(&address) {
                    parsed.push(address);
                }
            }
            wallets.insert(user_id, parsed);
        }

        let total: usize = wallets.values().map(Vec::len).sum();
        info!(users = wallets.len(), wallets = total, "Loaded wallet directory");

        Ok(Self {
            wallets: RwLock::new(wallets),
        })
    }

    /// Register an address for a user. Duplicates are ignored; identity is
    /// the parsed (checksum-normalized) address.
    pub async fn register(&self, user_id: &str, address: Address) {
        let mut wallets = self.wallets.write().await;
        let entry = wallets.entry(user_id.to_string()).or_default();
        if !entry.contains(&address) {
            entry.push(address);
        }
    }

    /// Total registered wallets across all users.
    pub async fn wallet_count(&self) -> usize {
        self.wallets.read().await.values().map(Vec::len).sum()
    }
}

impl WalletDirectory for WalletStore {
    async fn wallets_for_user(&self, user_id: &str) -> Vec<Address> {
        self.wallets
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn addr(raw: &str) -> Address {
        raw.parse().unwrap()
    }

    #[tokio::test]
    async fn register_and_list_are_per_user() {
        let store = WalletStore::new();
        store
            .register("u1", addr("0x1234567890123456789012345678901234567890"))
            .await;
        store
            .register("u2", addr("0x2222222222222222222222222222222222222222"))
            .await;

        assert_eq!(store.wallets_for_user("u1").await.len(), 1);
        assert_eq!(store.wallets_for_user("u2").await.len(), 1);
        assert!(store.wallets_for_user("u3").await.is_empty());
    }

    #[tokio::test]
    async fn register_ignores_duplicate_addresses() {
        let store = WalletStore::new();
        let address = addr("0x1234567890123456789012345678901234567890");
        store.register("u1", address).await;
        store.register("u1", address).await;

        assert_eq!(store.wallet_count().await, 1);
    }

    #[tokio::test]
    async fn load_file_parses_and_normalizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"u1": ["0x1234567890123456789012345678901234567890",
                      "0xabcdef0123456789abcdef0123456789abcdef01"]}}"#
        )
        .unwrap();

        let store = WalletStore::load_file(file.path()).unwrap();
        let wallets = store.wallets_for_user("u1").await;
        assert_eq!(wallets.len(), 2);
    }

    #[test]
    fn load_file_rejects_malformed_address() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"u1": ["not-an-address"]}}"#).unwrap();

        let result = WalletStore::load_file(file.path());
        assert!(matches!(result, Err(StoreError::BadAddress { .. })));
    }
}
