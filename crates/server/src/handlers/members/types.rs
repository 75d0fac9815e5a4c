//! Types for member-related handlers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::BackendError;
use crate::handlers::common::{AddressValidationError, SlotError, impl_error_response};

#[derive(Debug, Error)]
pub enum MembersError {
    #[error("contract backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("failed to decode contract response: {0}")]
    Response(#[from] SlotError),

    #[error("failed to decode contract response: {0}")]
    Decode(#[from] crate::codec::DecodeError),

    #[error(transparent)]
    InvalidAddress(#[from] AddressValidationError),
}

impl_error_response!(MembersError,
    MembersError::Backend(_) => BAD_GATEWAY,
    MembersError::Response(_) => BAD_GATEWAY,
    MembersError::Decode(_) => BAD_GATEWAY,
    MembersError::InvalidAddress(_) => BAD_REQUEST,
);

/// Query parameters for GET /members
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersQueryParams {
    /// Zero-based index to start from.
    #[serde(default)]
    pub from_index: u64,

    /// Page size.
    #[serde(default = "default_count")]
    pub count: u64,
}

fn default_count() -> u64 {
    50
}

/// Response for GET /members
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersResponse {
    pub members: Vec<String>,
}

/// Response for GET /members/{address}/shares
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSharesResponse {
    pub address: String,
    pub shares: String,
}
