//! In-process tests for the member endpoints.

use anyhow::Result;
use axum::http::StatusCode;
use integration_tests::{
    fixtures::{slot, top_level_biguint},
    get_json,
    mock::MockBackend,
    test_app,
};
use num_bigint::BigUint;
use server::codec::encode_address;

#[tokio::test]
async fn test_get_members_renders_bech32() -> Result<()> {
    let backend = MockBackend::new().with_query(
        "getMembers",
        vec![slot(&[0x01; 32]), slot(&[0x02; 32])],
    );
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/members").await?;
    assert_eq!(status, StatusCode::OK);
    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0], encode_address(&[0x01; 32]));
    assert_eq!(members[1], encode_address(&[0x02; 32]));
    assert!(members[0].as_str().unwrap().starts_with("claw1"));
    Ok(())
}

#[tokio::test]
async fn test_get_members_empty() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, body) = get_json(&app, "/v1/members?fromIndex=100&count=10").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["members"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_get_member_shares() -> Result<()> {
    let shares = BigUint::from(10u8).pow(18) * BigUint::from(500u32);
    let backend = MockBackend::new()
        .with_query("getMemberShares", vec![slot(&top_level_biguint(&shares))]);
    let app = test_app(backend);

    let address = encode_address(&[0x07; 32]);
    let (status, body) = get_json(&app, &format!("/v1/members/{address}/shares")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], address);
    assert_eq!(body["shares"], "500000000000000000000");
    Ok(())
}

#[tokio::test]
async fn test_get_member_shares_non_member_is_zero() -> Result<()> {
    let app = test_app(MockBackend::new());

    let address = encode_address(&[0x08; 32]);
    let (status, body) = get_json(&app, &format!("/v1/members/{address}/shares")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shares"], "0");
    Ok(())
}

#[tokio::test]
async fn test_get_member_shares_invalid_address() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, body) = get_json(&app, "/v1/members/not-an-address/shares").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid address"));
    Ok(())
}
