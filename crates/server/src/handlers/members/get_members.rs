use axum::{
    Json,
    extract::{Query, State},
};

use super::types::{MembersError, MembersQueryParams, MembersResponse};
use crate::backend::CallArg;
use crate::codec::scalar;
use crate::state::AppState;

/// Handler for GET /members
///
/// Each return slot is one raw 32-byte public key; rendering follows the
/// deployment's address format.
pub async fn get_members(
    State(state): State<AppState>,
    Query(params): Query<MembersQueryParams>,
) -> Result<Json<MembersResponse>, MembersError> {
    let slots = state
        .backend
        .query(
            "getMembers",
            &[CallArg::U64(params.from_index), CallArg::U64(params.count)],
        )
        .await?;

    let mut members = Vec::with_capacity(slots.len());
    for slot in &slots {
        let bytes = scalar::decode_base64(slot)?;
        let (pubkey, _) = scalar::nested_pubkey(&bytes, 0)?;
        members.push(state.renderer.render(&pubkey));
    }

    Ok(Json(MembersResponse { members }))
}
