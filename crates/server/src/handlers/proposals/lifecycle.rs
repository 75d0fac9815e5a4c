//! Lifecycle transition endpoints.
//!
//! Four thin wrappers around single-argument contract calls. The
//! contract enforces who may trigger which transition and when; these
//! handlers just submit.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use super::types::ProposalsError;
use crate::backend::CallArg;
use crate::handlers::common::SubmitResponse;
use crate::state::AppState;

async fn transition(
    state: &AppState,
    function: &str,
    proposal_id: u64,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    let receipt = state
        .backend
        .call(function, &[CallArg::U64(proposal_id)], None)
        .await?;
    info!(proposal_id, function, tx_hash = ?receipt.tx_hash, "transition submitted");

    Ok(Json(SubmitResponse {
        tx_hash: receipt.tx_hash,
    }))
}

/// Handler for POST /proposals/{proposalId}/finalize
///
/// Closes voting after the voting period; Open becomes Passed or Failed.
pub async fn finalize_voting(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    transition(&state, "finalizeVoting", proposal_id).await
}

/// Handler for POST /proposals/{proposalId}/execute
///
/// Pays out a Passed proposal once the time-lock has elapsed.
pub async fn execute_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    transition(&state, "executeProposal", proposal_id).await
}

/// Handler for POST /proposals/{proposalId}/cancel
///
/// Proposer-only withdrawal of an Open proposal.
pub async fn cancel_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    transition(&state, "cancelProposal", proposal_id).await
}

/// Handler for POST /proposals/{proposalId}/expire
///
/// Marks an Open proposal whose voting window lapsed as Failed.
pub async fn expire_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    transition(&state, "expireProposal", proposal_id).await
}
