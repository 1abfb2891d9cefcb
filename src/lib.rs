// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chainfolio - Multi-Chain Wallet Balance Aggregation Service
//!
//! Read-only portfolio service: it fans out over every (wallet, chain)
//! pair a user selects, queries redundant public JSON-RPC endpoints with
//! failover, prices native balances in USD, and serves the merged result
//! over HTTP.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer token validation (HS256 JWT)
//! - `balances` - Per-chain fetcher and the concurrent aggregator
//! - `blockchain` - EVM JSON-RPC client (alloy)
//! - `chains` - Static chain catalog
//! - `pricing` - USD price feed client

pub mod api;
pub mod auth;
pub mod balances;
pub mod blockchain;
pub mod chains;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod state;
pub mod store;
