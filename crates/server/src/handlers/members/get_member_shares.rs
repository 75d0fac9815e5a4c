use axum::{
    Json,
    extract::{Path, State},
};

use super::types::{MemberSharesResponse, MembersError};
use crate::backend::CallArg;
use crate::codec::scalar;
use crate::handlers::common::{decoded_slot, validate_address};
use crate::state::AppState;

/// Handler for GET /members/{address}/shares
///
/// A non-member has no stored entry; the contract returns nothing and
/// the balance is zero.
pub async fn get_member_shares(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<MemberSharesResponse>, MembersError> {
    validate_address(&address)?;

    let slots = state
        .backend
        .query("getMemberShares", &[CallArg::Addr(address.clone())])
        .await?;

    let shares = if slots.is_empty() {
        num_bigint::BigUint::from(0u8)
    } else {
        scalar::top_level_biguint(&decoded_slot(&slots, 0)?)
    };

    Ok(Json(MemberSharesResponse {
        address,
        shares: shares.to_string(),
    }))
}
