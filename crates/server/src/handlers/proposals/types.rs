//! Types for proposal-related handlers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::BackendError;
use crate::codec::{Proposal, VoteRecord};
use crate::handlers::common::{AddressValidationError, SlotError, impl_error_response};
use crate::utils::format_claw;

// ================================================================================================
// Errors
// ================================================================================================

#[derive(Debug, Error)]
pub enum ProposalsError {
    #[error("contract backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("failed to decode contract response: {0}")]
    Response(#[from] SlotError),

    #[error("failed to decode contract response: {0}")]
    Decode(#[from] crate::codec::DecodeError),

    #[error("proposal {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    InvalidAddress(#[from] AddressValidationError),

    #[error("invalid amount '{0}': expected a non-negative decimal integer")]
    InvalidAmount(String),
}

impl_error_response!(ProposalsError,
    ProposalsError::Backend(_) => BAD_GATEWAY,
    ProposalsError::Response(_) => BAD_GATEWAY,
    ProposalsError::Decode(_) => BAD_GATEWAY,
    ProposalsError::NotFound(_) => NOT_FOUND,
    ProposalsError::InvalidAddress(_) => BAD_REQUEST,
    ProposalsError::InvalidAmount(_) => BAD_REQUEST,
);

// ================================================================================================
// Query Parameters
// ================================================================================================

/// Query parameters for GET /proposals
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalsQueryParams {
    /// Proposal id to start from. Ids are one-based.
    #[serde(default = "default_from_id")]
    pub from_id: u64,

    /// Page size.
    #[serde(default = "default_count")]
    pub count: u64,
}

fn default_from_id() -> u64 {
    1
}

fn default_count() -> u64 {
    50
}

// ================================================================================================
// Response Types
// ================================================================================================

/// JSON shape of one decoded proposal.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
    pub id: u64,
    pub proposer: String,
    pub description: String,
    pub receiver: String,
    pub amount: String,
    pub amount_formatted: String,
    pub status: String,
    pub yes_votes: String,
    pub no_votes: String,
    pub created_at: u64,
    pub passed_at: u64,
    pub bulletin_post_id: u64,
}

impl From<Proposal> for ProposalResponse {
    fn from(p: Proposal) -> Self {
        Self {
            id: p.id,
            proposer: p.proposer,
            description: p.description,
            receiver: p.receiver,
            amount_formatted: format_claw(&p.amount),
            amount: p.amount.to_string(),
            status: p.status.to_string(),
            yes_votes: p.yes_votes.to_string(),
            no_votes: p.no_votes.to_string(),
            created_at: p.created_at,
            passed_at: p.passed_at,
            bulletin_post_id: p.bulletin_post_id,
        }
    }
}

/// Response for GET /proposals and GET /proposals/active
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalsResponse {
    pub proposals: Vec<ProposalResponse>,
}

/// JSON shape of one decoded vote record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecordResponse {
    pub voter: String,
    pub direction: String,
    pub weight: String,
}

impl From<VoteRecord> for VoteRecordResponse {
    fn from(v: VoteRecord) -> Self {
        Self {
            voter: v.voter,
            direction: v.direction.to_string(),
            weight: v.weight.to_string(),
        }
    }
}

/// Response for GET /proposals/{proposalId}/votes
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecordsResponse {
    pub proposal_id: u64,
    pub votes: Vec<VoteRecordResponse>,
}

/// Response for GET /proposals/{proposalId}/votes/{address}
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasVotedResponse {
    pub proposal_id: u64,
    pub address: String,
    pub has_voted: bool,
}

// ================================================================================================
// Request Types
// ================================================================================================

/// Body for POST /proposals
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProposalRequest {
    pub description: String,
    pub receiver: String,
    /// Amount in attoCLAW, as a decimal string.
    pub amount: String,
    /// Id of the bulletin board post discussing this proposal.
    pub bulletin_post_id: u64,
}

/// Body for POST /proposals/{proposalId}/votes
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// true votes yes, false votes no.
    pub support: bool,
}
