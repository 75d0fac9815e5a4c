//! In-process tests for the proposal endpoints.

use anyhow::Result;
use axum::http::StatusCode;
use integration_tests::{
    fixtures::{ProposalFixture, encode_vote_record, slot},
    get_json,
    mock::MockBackend,
    post_json, test_app,
};
use num_bigint::BigUint;
use serde_json::json;
use server::codec::encode_address;

#[tokio::test]
async fn test_get_proposal() -> Result<()> {
    let fixture = ProposalFixture::default();
    let backend = MockBackend::new().with_query("getProposal", vec![fixture.slot()]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["proposer"], encode_address(&[0x11; 32]));
    assert_eq!(body["receiver"], encode_address(&[0x22; 32]));
    assert_eq!(body["description"], "Fund the relay upgrade");
    assert_eq!(body["amount"], "1500000000000000000000");
    assert_eq!(body["amountFormatted"], "1,500.00 CLAW");
    assert_eq!(body["status"], "Open");
    assert_eq!(body["bulletinPostId"], 42);
    Ok(())
}

#[tokio::test]
async fn test_get_proposal_unknown_status_is_served() -> Result<()> {
    let fixture = ProposalFixture {
        status: 6,
        ..Default::default()
    };
    let backend = MockBackend::new().with_query("getProposal", vec![fixture.slot()]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Unknown(6)");
    Ok(())
}

#[tokio::test]
async fn test_get_proposal_not_found() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, body) = get_json(&app, "/v1/proposals/999").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("999"));
    Ok(())
}

#[tokio::test]
async fn test_get_proposal_empty_slot_is_not_found() -> Result<()> {
    let backend = MockBackend::new().with_query("getProposal", vec![slot(&[])]);
    let app = test_app(backend);

    let (status, _) = get_json(&app, "/v1/proposals/5").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_get_proposal_truncated_record_is_bad_gateway() -> Result<()> {
    let bytes = ProposalFixture::default().encode();
    let backend =
        MockBackend::new().with_query("getProposal", vec![slot(&bytes[..bytes.len() - 4])]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals/1").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("truncated"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_base64_slot_is_bad_gateway() -> Result<()> {
    let backend =
        MockBackend::new().with_query("getProposal", vec!["not base64!!".to_string()]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals/1").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("base64"));
    Ok(())
}

#[tokio::test]
async fn test_get_proposals_page() -> Result<()> {
    let first = ProposalFixture::default();
    let second = ProposalFixture {
        id: 2,
        status: 3,
        passed_at: 1_700_100_000,
        ..Default::default()
    };
    let backend =
        MockBackend::new().with_query("getProposals", vec![first.slot(), second.slot()]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals?fromId=1&count=10").await?;
    assert_eq!(status, StatusCode::OK);
    let proposals = body["proposals"].as_array().unwrap();
    assert_eq!(proposals.len(), 2);
    assert_eq!(proposals[0]["id"], 1);
    assert_eq!(proposals[1]["id"], 2);
    assert_eq!(proposals[1]["status"], "Executed");
    Ok(())
}

#[tokio::test]
async fn test_get_active_proposals_empty() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, body) = get_json(&app, "/v1/proposals/active").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["proposals"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_get_vote_records() -> Result<()> {
    let backend = MockBackend::new().with_query(
        "getVoteRecords",
        vec![
            slot(&encode_vote_record([0x01; 32], 0, &BigUint::from(100u32))),
            slot(&encode_vote_record([0x02; 32], 1, &BigUint::from(40u32))),
        ],
    );
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals/3/votes").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["proposalId"], 3);
    let votes = body["votes"].as_array().unwrap();
    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0]["voter"], encode_address(&[0x01; 32]));
    assert_eq!(votes[0]["direction"], "Yes");
    assert_eq!(votes[0]["weight"], "100");
    assert_eq!(votes[1]["direction"], "No");
    Ok(())
}

#[tokio::test]
async fn test_has_voted() -> Result<()> {
    let backend = MockBackend::new().with_query("hasAgentVoted", vec![slot(&[1])]);
    let app = test_app(backend);

    let address = encode_address(&[0x05; 32]);
    let (status, body) = get_json(&app, &format!("/v1/proposals/3/votes/{address}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasVoted"], true);
    assert_eq!(body["address"], address);
    Ok(())
}

#[tokio::test]
async fn test_has_voted_no_data_is_false() -> Result<()> {
    let app = test_app(MockBackend::new());

    let address = encode_address(&[0x06; 32]);
    let (status, body) = get_json(&app, &format!("/v1/proposals/3/votes/{address}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hasVoted"], false);
    Ok(())
}

#[tokio::test]
async fn test_submit_proposal_argument_order() -> Result<()> {
    let backend = MockBackend::new();
    let calls = backend.clone();
    let app = test_app(backend);

    let receiver = encode_address(&[0x22; 32]);
    let (status, body) = post_json(
        &app,
        "/v1/proposals",
        json!({
            "description": "Fund the relay upgrade",
            "receiver": receiver,
            "amount": "1500000000000000000000",
            "bulletinPostId": 42
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["txHash"], "c0ffee");

    let recorded = calls.recorded_calls();
    assert_eq!(recorded[0].function, "submitProposal");
    assert_eq!(
        recorded[0].args,
        vec![
            "str:Fund the relay upgrade".to_string(),
            receiver,
            "1500000000000000000000".to_string(),
            "42".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_submit_proposal_rejects_bad_receiver() -> Result<()> {
    let app = test_app(MockBackend::new());

    let (status, _) = post_json(
        &app,
        "/v1/proposals",
        json!({
            "description": "x",
            "receiver": "0xdeadbeef",
            "amount": "1",
            "bulletinPostId": 1
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_vote_renders_support_flag() -> Result<()> {
    let backend = MockBackend::new();
    let calls = backend.clone();
    let app = test_app(backend);

    let (status, _) = post_json(&app, "/v1/proposals/7/votes", json!({ "support": true })).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post_json(&app, "/v1/proposals/7/votes", json!({ "support": false })).await?;
    assert_eq!(status, StatusCode::OK);

    let recorded = calls.recorded_calls();
    assert_eq!(recorded[0].args, vec!["7".to_string(), "1".to_string()]);
    assert_eq!(recorded[1].args, vec!["7".to_string(), "0".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_lifecycle_endpoints() -> Result<()> {
    let backend = MockBackend::new();
    let calls = backend.clone();
    let app = test_app(backend);

    for (path, function) in [
        ("finalize", "finalizeVoting"),
        ("execute", "executeProposal"),
        ("cancel", "cancelProposal"),
        ("expire", "expireProposal"),
    ] {
        let (status, body) =
            post_json(&app, &format!("/v1/proposals/9/{path}"), json!({})).await?;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body["txHash"], "c0ffee");
        let last = calls.recorded_calls().pop().unwrap();
        assert_eq!(last.function, function);
        assert_eq!(last.args, vec!["9".to_string()]);
    }
    Ok(())
}

#[tokio::test]
async fn test_get_proposals_wide_vote_totals() -> Result<()> {
    let fixture = ProposalFixture {
        yes_votes: BigUint::from(10u8).pow(24),
        no_votes: BigUint::from(10u8).pow(23),
        ..Default::default()
    };
    let backend = MockBackend::new().with_query("getProposal", vec![fixture.slot()]);
    let app = test_app(backend);

    let (status, body) = get_json(&app, "/v1/proposals/1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["yesVotes"], "1000000000000000000000000");
    assert_eq!(body["noVotes"], "100000000000000000000000");
    Ok(())
}
