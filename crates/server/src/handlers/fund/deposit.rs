use axum::{Json, extract::State};
use tracing::info;

use super::types::{DepositRequest, FundError};
use crate::handlers::common::{SubmitResponse, parse_amount};
use crate::state::AppState;

/// Handler for POST /fund/deposit
///
/// Deposits CLAW into the fund; the amount travels as the transaction
/// value, not as a call argument.
pub async fn deposit(
    State(state): State<AppState>,
    Json(body): Json<DepositRequest>,
) -> Result<Json<SubmitResponse>, FundError> {
    let amount =
        parse_amount(&body.amount).ok_or_else(|| FundError::InvalidAmount(body.amount.clone()))?;

    let receipt = state.backend.call("deposit", &[], Some(&amount)).await?;
    info!(amount = %amount, tx_hash = ?receipt.tx_hash, "deposit submitted");

    Ok(Json(SubmitResponse {
        tx_hash: receipt.tx_hash,
    }))
}
