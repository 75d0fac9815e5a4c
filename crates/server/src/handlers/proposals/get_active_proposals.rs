use axum::{Json, extract::State};

use super::types::{ProposalsError, ProposalsResponse};
use crate::codec::{decode_proposal, scalar};
use crate::state::AppState;

/// Handler for GET /proposals/active
///
/// Active means Open, Passed or Executable; the contract does the
/// filtering, this endpoint just decodes.
pub async fn get_active_proposals(
    State(state): State<AppState>,
) -> Result<Json<ProposalsResponse>, ProposalsError> {
    let slots = state.backend.query("getActiveProposals", &[]).await?;

    let mut proposals = Vec::with_capacity(slots.len());
    for slot in &slots {
        let bytes = scalar::decode_base64(slot)?;
        let (proposal, _) = decode_proposal(&bytes, 0, &state.renderer)?;
        proposals.push(proposal.into());
    }

    Ok(Json(ProposalsResponse { proposals }))
}
