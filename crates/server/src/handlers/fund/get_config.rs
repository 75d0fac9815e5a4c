use axum::{Json, extract::State};

use super::types::{ContractConfigResponse, FundError};
use crate::codec::scalar;
use crate::handlers::common::decoded_slot;
use crate::state::AppState;
use crate::utils::format_claw;

/// Handler for GET /fund/config
///
/// The getContractConfig view returns four top-level slots: minimum
/// deposit, minimum uptime score, voting period, time-lock period.
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<ContractConfigResponse>, FundError> {
    let slots = state.backend.query("getContractConfig", &[]).await?;

    let min_deposit = scalar::top_level_biguint(&decoded_slot(&slots, 0)?);
    let min_uptime_score = scalar::top_level_u64(&decoded_slot(&slots, 1)?)?;
    let voting_period = scalar::top_level_u64(&decoded_slot(&slots, 2)?)?;
    let timelock_period = scalar::top_level_u64(&decoded_slot(&slots, 3)?)?;

    Ok(Json(ContractConfigResponse {
        min_deposit_formatted: format_claw(&min_deposit),
        min_deposit: min_deposit.to_string(),
        min_uptime_score,
        voting_period,
        timelock_period,
    }))
}
