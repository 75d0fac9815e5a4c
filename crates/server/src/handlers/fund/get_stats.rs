use axum::{Json, extract::State};

use super::types::{FundError, FundStatsResponse};
use crate::codec::scalar;
use crate::handlers::common::decoded_slot;
use crate::state::AppState;
use crate::utils::format_claw;

/// Handler for GET /fund/stats
///
/// The getFundStats view returns five top-level slots in a fixed order:
/// aum, total shares, member count, proposal count, minimum uptime score.
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<FundStatsResponse>, FundError> {
    let slots = state.backend.query("getFundStats", &[]).await?;

    let aum = scalar::top_level_biguint(&decoded_slot(&slots, 0)?);
    let total_shares = scalar::top_level_biguint(&decoded_slot(&slots, 1)?);
    let member_count = scalar::top_level_u64(&decoded_slot(&slots, 2)?)?;
    let proposal_count = scalar::top_level_u64(&decoded_slot(&slots, 3)?)?;
    let min_uptime_score = scalar::top_level_u64(&decoded_slot(&slots, 4)?)?;

    Ok(Json(FundStatsResponse {
        aum_formatted: format_claw(&aum),
        aum: aum.to_string(),
        total_shares: total_shares.to_string(),
        member_count,
        proposal_count,
        min_uptime_score,
    }))
}
