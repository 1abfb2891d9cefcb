// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EVM node access: JSON-RPC client, ERC-20 bindings, unit normalization.

pub mod client;
pub mod erc20;
pub mod units;

pub use client::{EvmRpc, NodeRpc, RpcError};
pub use units::Amount;
