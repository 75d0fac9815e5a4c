use axum::{Json, extract::State};

use super::types::{FundError, SharePriceResponse};
use crate::codec::scalar;
use crate::handlers::common::decoded_slot;
use crate::state::AppState;
use crate::utils::format_claw;

/// Handler for GET /fund/share-price
pub async fn get_share_price(
    State(state): State<AppState>,
) -> Result<Json<SharePriceResponse>, FundError> {
    let slots = state.backend.query("getSharePrice", &[]).await?;
    let price = scalar::top_level_biguint(&decoded_slot(&slots, 0)?);

    Ok(Json(SharePriceResponse {
        share_price_formatted: format_claw(&price),
        share_price: price.to_string(),
    }))
}
