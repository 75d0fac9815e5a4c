use axum::{
    Json,
    extract::{Path, State},
};

use super::types::{ProposalsError, VoteRecordsResponse};
use crate::backend::CallArg;
use crate::codec::{decode_vote_record, scalar};
use crate::state::AppState;

/// Handler for GET /proposals/{proposalId}/votes
///
/// Each return slot holds one nested vote record. A proposal with no
/// votes yields an empty list.
pub async fn get_vote_records(
    State(state): State<AppState>,
    Path(proposal_id): Path<u64>,
) -> Result<Json<VoteRecordsResponse>, ProposalsError> {
    let slots = state
        .backend
        .query("getVoteRecords", &[CallArg::U64(proposal_id)])
        .await?;

    let mut votes = Vec::with_capacity(slots.len());
    for slot in &slots {
        let bytes = scalar::decode_base64(slot)?;
        let (record, _) = decode_vote_record(&bytes, 0, &state.renderer)?;
        votes.push(record.into());
    }

    Ok(Json(VoteRecordsResponse { proposal_id, votes }))
}
