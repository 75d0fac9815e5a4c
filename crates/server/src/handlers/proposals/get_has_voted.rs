use axum::{
    Json,
    extract::{Path, State},
};

use super::types::{HasVotedResponse, ProposalsError};
use crate::backend::CallArg;
use crate::codec::scalar;
use crate::handlers::common::validate_address;
use crate::state::AppState;

/// Handler for GET /proposals/{proposalId}/votes/{address}
///
/// Missing return data means the agent never voted, not an error.
pub async fn get_has_voted(
    State(state): State<AppState>,
    Path((proposal_id, address)): Path<(u64, String)>,
) -> Result<Json<HasVotedResponse>, ProposalsError> {
    validate_address(&address)?;

    let slots = state
        .backend
        .query(
            "hasAgentVoted",
            &[CallArg::U64(proposal_id), CallArg::Addr(address.clone())],
        )
        .await?;

    let has_voted = match slots.first() {
        Some(slot) => scalar::top_level_bool(&scalar::decode_base64(slot)?),
        None => false,
    };

    Ok(Json(HasVotedResponse {
        proposal_id,
        address,
        has_voted,
    }))
}
