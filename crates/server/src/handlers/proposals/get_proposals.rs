use axum::{
    Json,
    extract::{Query, State},
};

use super::types::{ProposalsError, ProposalsQueryParams, ProposalsResponse};
use crate::backend::CallArg;
use crate::codec::{decode_proposal, scalar};
use crate::state::AppState;

/// Handler for GET /proposals
///
/// Paginated: one return slot per proposal, each a complete nested
/// record. An empty page is an empty list, not an error.
pub async fn get_proposals(
    State(state): State<AppState>,
    Query(params): Query<ProposalsQueryParams>,
) -> Result<Json<ProposalsResponse>, ProposalsError> {
    let slots = state
        .backend
        .query(
            "getProposals",
            &[CallArg::U64(params.from_id), CallArg::U64(params.count)],
        )
        .await?;

    let mut proposals = Vec::with_capacity(slots.len());
    for slot in &slots {
        let bytes = scalar::decode_base64(slot)?;
        let (proposal, _) = decode_proposal(&bytes, 0, &state.renderer)?;
        proposals.push(proposal.into());
    }

    Ok(Json(ProposalsResponse { proposals }))
}
