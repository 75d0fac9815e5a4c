pub mod fixtures;
pub mod mock;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use config::FundApiConfig;
use http_body_util::BodyExt;
use server::{app, state::AppState};
use tower::ServiceExt;

use mock::MockBackend;

/// Fund contract address used by all tests.
pub const TEST_CONTRACT: &str = "claw1qqqqqqqqqqqqqpgqkru70vyjyx3t5je4v2ywcjz33xnkfjfws0cszj63m0";

/// Build the full application router around a mock backend. No network,
/// no subprocess.
pub fn test_app(backend: MockBackend) -> Router {
    let config = FundApiConfig {
        chain: config::ChainConfig {
            contract_address: TEST_CONTRACT.to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let state = AppState::with_backend(config, Arc::new(backend));
    app::create_app(state)
}

/// Drive one GET request through the router and return status plus
/// parsed JSON body.
pub async fn get_json(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}

/// Drive one POST request with a JSON body through the router.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
        )
        .await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}
