use axum::{
    Json,
    extract::{Path, State},
};

use super::types::{ProposalResponse, ProposalsError};
use crate::backend::CallArg;
use crate::codec::{decode_proposal, scalar};
use crate::state::AppState;

/// Handler for GET /proposals/{proposalId}
///
/// The view returns no data for an id the contract has never assigned;
/// that maps to 404 rather than an empty body.
pub async fn get_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
) -> Result<Json<ProposalResponse>, ProposalsError> {
    let slots = state
        .backend
        .query("getProposal", &[CallArg::U64(proposal_id)])
        .await?;

    let Some(slot) = slots.first() else {
        return Err(ProposalsError::NotFound(proposal_id));
    };
    let bytes = scalar::decode_base64(slot)?;
    if bytes.is_empty() {
        return Err(ProposalsError::NotFound(proposal_id));
    }

    let (proposal, _) = decode_proposal(&bytes, 0, &state.renderer)?;
    Ok(Json(proposal.into()))
}
