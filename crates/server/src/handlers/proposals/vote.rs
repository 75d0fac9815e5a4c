use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use super::types::{ProposalsError, VoteRequest};
use crate::backend::CallArg;
use crate::handlers::common::SubmitResponse;
use crate::state::AppState;

/// Handler for POST /proposals/{proposalId}/votes
pub async fn vote(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
    Json(body): Json<VoteRequest>,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    let receipt = state
        .backend
        .call(
            "vote",
            &[CallArg::U64(proposal_id), CallArg::Bool(body.support)],
            None,
        )
        .await?;
    info!(
        proposal_id,
        support = body.support,
        tx_hash = ?receipt.tx_hash,
        "vote submitted"
    );

    Ok(Json(SubmitResponse {
        tx_hash: receipt.tx_hash,
    }))
}
