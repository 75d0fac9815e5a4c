use axum::{Json, extract::State};
use tracing::info;

use super::types::{FundError, WithdrawRequest};
use crate::backend::CallArg;
use crate::handlers::common::{SubmitResponse, parse_amount};
use crate::state::AppState;

/// Handler for POST /fund/withdraw
///
/// Burns shares; the contract pays out the corresponding CLAW.
pub async fn withdraw(
    State(state): State<AppState>,
    Json(body): Json<WithdrawRequest>,
) -> Result<Json<SubmitResponse>, FundError> {
    let shares =
        parse_amount(&body.shares).ok_or_else(|| FundError::InvalidAmount(body.shares.clone()))?;

    let receipt = state
        .backend
        .call("withdraw", &[CallArg::BigUint(shares.clone())], None)
        .await?;
    info!(shares = %shares, tx_hash = ?receipt.tx_hash, "withdrawal submitted");

    Ok(Json(SubmitResponse {
        tx_hash: receipt.tx_hash,
    }))
}
