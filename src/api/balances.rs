// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{BalancesRequest, BalancesResponse};
use crate::state::AppState;

/// Resolve balances for every wallet of the caller across the selected
/// chains.
///
/// Unknown chain names fail the whole request with 404. Chains or
/// price pairs that cannot be resolved right now are silently omitted
/// from the results; the response is the portion of the portfolio that
/// could be observed.
#[utoipa::path(
    post,
    path = "/v1/balances",
    tag = "Balances",
    request_body = BalancesRequest,
    responses(
        (status = 200, description = "Resolved balances", body = BalancesResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "A selected chain is not in the catalog")
    )
)]
pub async fn get_balances(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<BalancesRequest>,
) -> Result<Json<BalancesResponse>, ApiError> {
    let selected: Vec<String> = request
        .selected_chains
        .into_iter()
        .map(|chain| chain.name)
        .collect();

    let results = state
        .aggregator
        .wallet_balances(&user.user_id, &selected)
        .await?;

    info!(
        user_id = %user.user_id,
        chains = selected.len(),
        results = results.len(),
        "Resolved balance snapshot"
    );

    Ok(Json(BalancesResponse {
        results,
        as_of: Utc::now(),
    }))
}
