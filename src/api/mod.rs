// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::Request,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        BalancesRequest, BalancesResponse, ChainBalanceEntry, ChainInfo, ChainsResponse,
        SelectedChain, WalletBalance,
    },
    state::AppState,
};

pub mod balances;
pub mod chains;
pub mod health;

/// Tags each request with a fresh UUID so log lines across the fan-out
/// can be correlated.
#[derive(Clone, Copy, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        uuid::Uuid::new_v4()
            .to_string()
            .parse()
            .ok()
            .map(RequestId::new)
    }
}

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/chains", get(chains::list_chains))
        .route("/balances", post(balances::get_balances));

    let api = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .nest("/v1", v1_routes)
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        chains::list_chains,
        balances::get_balances
    ),
    components(
        schemas(
            SelectedChain,
            BalancesRequest,
            BalancesResponse,
            ChainBalanceEntry,
            WalletBalance,
            ChainInfo,
            ChainsResponse,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health probes"),
        (name = "Chains", description = "Supported chain catalog"),
        (name = "Balances", description = "Multi-chain balance aggregation")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::StatusCode;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::Claims;

    const SECRET: &[u8] = b"router-test-secret";

    fn app() -> Router {
        router(AppState::for_tests(SECRET))
    }

    fn bearer(sub: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp: 9_999_999_999,
            iat: 1_700_000_000,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();
        format!("Bearer {token}")
    }

    fn balances_request(auth: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/v1/balances")
            .header("content-type", "application/json");
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = app();
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn liveness_returns_ok() {
        let request = Request::builder()
            .uri("/health/live")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_reports_wallet_count() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["checks"]["wallets"], 0);
    }

    #[tokio::test]
    async fn chains_catalog_is_public() {
        let request = Request::builder()
            .uri("/v1/chains")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(!json["chains"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn balances_requires_auth() {
        let request = balances_request(None, r#"{"selected_chains":[{"name":"Ethereum"}]}"#);
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_chain_returns_404() {
        let request = balances_request(
            Some(&bearer("user_1")),
            r#"{"selected_chains":[{"name":"Atlantis"}]}"#,
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Chain not found");
    }

    #[tokio::test]
    async fn user_without_wallets_gets_empty_results() {
        // No wallets registered, so the aggregator returns before any RPC
        // or price feed traffic.
        let request = balances_request(
            Some(&bearer("user_1")),
            r#"{"selected_chains":[{"name":"Ethereum"},{"name":"Polygon"}]}"#,
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["results"], serde_json::json!([]));
        assert!(json["as_of"].is_string());
    }
}
