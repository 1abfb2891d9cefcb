// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::chains::CHAINS;
use crate::models::{ChainInfo, ChainsResponse};

/// List the supported chain catalog.
///
/// Public: clients need the catalog before they can authenticate a
/// balance request.
#[utoipa::path(
    get,
    path = "/v1/chains",
    tag = "Chains",
    responses(
        (status = 200, description = "Supported chains", body = ChainsResponse)
    )
)]
pub async fn list_chains() -> Json<ChainsResponse> {
    let chains = CHAINS
        .iter()
        .map(|chain| ChainInfo {
            name: chain.name.to_string(),
            symbol: chain.currency.to_string(),
            logo: chain.logo.to_string(),
        })
        .collect();

    Json(ChainsResponse { chains })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catalog_is_complete_and_ordered() {
        let Json(response) = list_chains().await;
        assert_eq!(response.chains.len(), CHAINS.len());
        assert_eq!(response.chains[0].name, CHAINS[0].name);
        assert!(response.chains.iter().any(|c| c.name == "Ethereum"));
    }
}
