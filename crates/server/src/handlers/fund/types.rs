//! Types for fund-level handlers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::BackendError;
use crate::handlers::common::{SlotError, impl_error_response};

// ================================================================================================
// Errors
// ================================================================================================

#[derive(Debug, Error)]
pub enum FundError {
    #[error("contract backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("failed to decode contract response: {0}")]
    Response(#[from] SlotError),

    #[error("failed to decode contract response: {0}")]
    Decode(#[from] crate::codec::DecodeError),

    #[error("invalid amount '{0}': expected a non-negative decimal integer")]
    InvalidAmount(String),
}

impl_error_response!(FundError,
    FundError::Backend(_) => BAD_GATEWAY,
    FundError::Response(_) => BAD_GATEWAY,
    FundError::Decode(_) => BAD_GATEWAY,
    FundError::InvalidAmount(_) => BAD_REQUEST,
);

// ================================================================================================
// Response Types
// ================================================================================================

/// Response for GET /fund/stats
///
/// attoCLAW balances are serialized as decimal strings; they routinely
/// exceed what JSON numbers can carry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundStatsResponse {
    pub aum: String,
    pub aum_formatted: String,
    pub total_shares: String,
    pub member_count: u64,
    pub proposal_count: u64,
    pub min_uptime_score: u64,
}

/// Response for GET /fund/share-price
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePriceResponse {
    pub share_price: String,
    pub share_price_formatted: String,
}

/// Response for GET /fund/config
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConfigResponse {
    pub min_deposit: String,
    pub min_deposit_formatted: String,
    pub min_uptime_score: u64,
    pub voting_period: u64,
    pub timelock_period: u64,
}

/// Response for GET /fund/epochs/{epoch}/spent
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochSpentResponse {
    pub epoch: u64,
    pub spent: String,
    pub spent_formatted: String,
}

// ================================================================================================
// Request Types
// ================================================================================================

/// Body for POST /fund/deposit
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    /// Amount in attoCLAW, as a decimal string.
    pub amount: String,
}

/// Body for POST /fund/withdraw
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    /// Shares to burn, as a decimal string.
    pub shares: String,
}
