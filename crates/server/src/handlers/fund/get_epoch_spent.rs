use axum::{
    Json,
    extract::{Path, State},
};

use super::types::{EpochSpentResponse, FundError};
use crate::backend::CallArg;
use crate::codec::scalar;
use crate::handlers::common::decoded_slot;
use crate::state::AppState;
use crate::utils::format_claw;

/// Handler for GET /fund/epochs/{epoch}/spent
///
/// An epoch with no spending yields no return data; that is zero, not an
/// error.
pub async fn get_epoch_spent(
    State(state): State<AppState>,
    Path(epoch): Path<u64>,
) -> Result<Json<EpochSpentResponse>, FundError> {
    let slots = state
        .backend
        .query("getEpochSpent", &[CallArg::U64(epoch)])
        .await?;

    let spent = if slots.is_empty() {
        num_bigint::BigUint::from(0u8)
    } else {
        scalar::top_level_biguint(&decoded_slot(&slots, 0)?)
    };

    Ok(Json(EpochSpentResponse {
        epoch,
        spent_formatted: format_claw(&spent),
        spent: spent.to_string(),
    }))
}
