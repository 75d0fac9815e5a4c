//! In-process tests for the fund-level endpoints.

use anyhow::Result;
use axum::http::StatusCode;
use integration_tests::{
    fixtures::{slot, top_level_biguint, top_level_u64},
    get_json,
    mock::MockBackend,
    post_json, test_app,
};
use num_bigint::BigUint;
use serde_json::json;

fn claw(whole: u64) -> BigUint {
    BigUint::from(whole) * BigUint::from(10u8).pow(18)
}

#[tokio::test]
async fn test_get_stats() -> Result<()> {
    let backend = MockBackend::new().with_query(
        "getFundStats",
        vec![
            slot(&top_level_biguint(&claw(12_500))),
            slot(&top_level_biguint(&claw(12_000))),
            slot(&top_level_u64(7)),
            slot(&top_level_u64(3)),
            slot(&top_level_u64(95)),
        ],
    );
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/fund/stats").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aum"], "12500000000000000000000");
    assert_eq!(body["aumFormatted"], "12,500.00 CLAW");
    assert_eq!(body["totalShares"], "12000000000000000000000");
    assert_eq!(body["memberCount"], 7);
    assert_eq!(body["proposalCount"], 3);
    assert_eq!(body["minUptimeScore"], 95);
    Ok(())
}

#[tokio::test]
async fn test_get_stats_short_response_is_bad_gateway() -> Result<()> {
    let backend =
        MockBackend::new().with_query("getFundStats", vec![slot(&top_level_u64(1))]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/fund/stats").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_get_stats_backend_failure_is_bad_gateway() -> Result<()> {
    let app = test_app(MockBackend::new().failing_queries());

    let (status, _) = get_json(&app, "/v1/fund/stats").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    Ok(())
}

#[tokio::test]
async fn test_get_share_price() -> Result<()> {
    // 1.05 CLAW per share
    let price = BigUint::from(10u8).pow(16) * BigUint::from(105u32);
    let backend =
        MockBackend::new().with_query("getSharePrice", vec![slot(&top_level_biguint(&price))]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/fund/share-price").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sharePrice"], "1050000000000000000");
    assert_eq!(body["sharePriceFormatted"], "1.05 CLAW");
    Ok(())
}

#[tokio::test]
async fn test_get_config() -> Result<()> {
    let backend = MockBackend::new().with_query(
        "getContractConfig",
        vec![
            slot(&top_level_biguint(&claw(100))),
            slot(&top_level_u64(95)),
            slot(&top_level_u64(86_400)),
            slot(&top_level_u64(86_400)),
        ],
    );
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/fund/config").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["minDeposit"], "100000000000000000000");
    assert_eq!(body["minDepositFormatted"], "100.00 CLAW");
    assert_eq!(body["minUptimeScore"], 95);
    assert_eq!(body["votingPeriod"], 86_400);
    assert_eq!(body["timelockPeriod"], 86_400);
    Ok(())
}

#[tokio::test]
async fn test_get_epoch_spent() -> Result<()> {
    let backend = MockBackend::new()
        .with_query("getEpochSpent", vec![slot(&top_level_biguint(&claw(250)))]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/fund/epochs/12/spent").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["epoch"], 12);
    assert_eq!(body["spent"], "250000000000000000000");
    Ok(())
}

#[tokio::test]
async fn test_get_epoch_spent_no_data_is_zero() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, body) = get_json(&app, "/v1/fund/epochs/999/spent").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spent"], "0");
    assert_eq!(body["spentFormatted"], "0.00 CLAW");
    Ok(())
}

#[tokio::test]
async fn test_deposit_passes_amount_as_value() -> Result<()> {
    let backend = MockBackend::new();
    let calls = backend.clone();
    let app = test_app(backend);

    let (status, body) = post_json(
        &app,
        "/v1/fund/deposit",
        json!({ "amount": "5000000000000000000" }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["txHash"], "c0ffee");

    let recorded = calls.recorded_calls();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].function, "deposit");
    assert!(recorded[0].args.is_empty());
    assert_eq!(recorded[0].value.as_deref(), Some("5000000000000000000"));
    Ok(())
}

#[tokio::test]
async fn test_deposit_rejects_bad_amount() -> Result<()> {
    let backend = MockBackend::new();
    let calls = backend.clone();
    let app = test_app(backend);

    for bad in ["-5", "1.5", "abc", ""] {
        let (status, body) = post_json(&app, "/v1/fund/deposit", json!({ "amount": bad })).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "amount {bad:?}");
        assert!(body["error"].is_string());
    }
    assert!(calls.recorded_calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_withdraw_passes_shares_as_argument() -> Result<()> {
    let backend = MockBackend::new();
    let calls = backend.clone();
    let app = test_app(backend);

    let (status, _) = post_json(&app, "/v1/fund/withdraw", json!({ "shares": "1000" })).await?;
    assert_eq!(status, StatusCode::OK);

    let recorded = calls.recorded_calls();
    assert_eq!(recorded[0].function, "withdraw");
    assert_eq!(recorded[0].args, vec!["1000".to_string()]);
    assert_eq!(recorded[0].value, None);
    Ok(())
}

#[tokio::test]
async fn test_failed_call_is_bad_gateway() -> Result<()> {
    let app = test_app(MockBackend::new().failing_calls());

    let (status, body) =
        post_json(&app, "/v1/fund/withdraw", json!({ "shares": "1" })).await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("signature rejected"));
    Ok(())
}

#[tokio::test]
async fn test_health_and_root() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, body) = get_json(&app, "/v1/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(&app, "/").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["routes"].as_array().unwrap().len() > 10);
    Ok(())
}
