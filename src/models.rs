// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request/response schemas for the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::Amount;

/// A chain selected by the caller. Only `name` is consulted; `symbol` and
/// `logo` are accepted because the frontend echoes back full catalog
/// entries.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SelectedChain {
    /// Catalog display name, e.g. "Ethereum".
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub symbol: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub logo: Option<String>,
}

/// Body of `POST /v1/balances`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BalancesRequest {
    pub selected_chains: Vec<SelectedChain>,
}

/// Balances one wallet holds on one chain.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WalletBalance {
    /// Checksum-cased wallet address.
    #[schema(examples("0x1234567890123456789012345678901234567890"))]
    pub address: String,
    /// Native balance in human units.
    #[schema(value_type = f64, examples(5))]
    pub native_balance: Amount,
    /// USD valuation of the native balance.
    #[schema(value_type = f64, examples(1000))]
    pub native_in_usd: Amount,
    /// USDT balance, when the chain has a catalogued USDT contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, examples(50.167))]
    pub usdt_balance: Option<Amount>,
    /// USDC balance, when the chain has a catalogued USDC contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, examples(0.000902))]
    pub usdc_balance: Option<Amount>,
}

/// One resolved (wallet, chain) pair.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChainBalanceEntry {
    /// Chain display name.
    pub chain: String,
    pub balance: WalletBalance,
}

/// Response of `POST /v1/balances`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalancesResponse {
    pub results: Vec<ChainBalanceEntry>,
    /// When the snapshot was assembled.
    pub as_of: DateTime<Utc>,
}

/// Catalog entry as shown to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChainInfo {
    #[schema(examples("Ethereum"))]
    pub name: String,
    #[schema(examples("ETH"))]
    pub symbol: String,
    #[schema(examples("/static/chains/ethereum-eth-logo.png"))]
    pub logo: String,
}

/// Response of `GET /v1/chains`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChainsResponse {
    pub chains: Vec<ChainInfo>,
}
