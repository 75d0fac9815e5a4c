//! Decoder for the governance Proposal record.

use std::fmt;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use super::address::AddressRenderer;
use super::error::DecodeError;
use super::scalar;

/// Lifecycle state of a proposal.
///
/// The contract walks Open → {Passed → Executable → Executed | Failed} |
/// Cancelled; the decoder renders whatever byte it is given without
/// judging transition legality — that is the contract's concern. Bytes
/// outside the known table stay representable as `Unknown(n)` so a newer
/// contract schema never breaks decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    Open,
    Passed,
    Executable,
    Executed,
    Failed,
    Cancelled,
    Unknown(u8),
}

impl ProposalStatus {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Self::Open,
            1 => Self::Passed,
            2 => Self::Executable,
            3 => Self::Executed,
            4 => Self::Failed,
            5 => Self::Cancelled,
            other => Self::Unknown(other),
        }
    }

    /// Open, Passed and Executable proposals still accept member actions.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::Passed | Self::Executable)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Passed => write!(f, "Passed"),
            Self::Executable => write!(f, "Executable"),
            Self::Executed => write!(f, "Executed"),
            Self::Failed => write!(f, "Failed"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Unknown(byte) => write!(f, "Unknown({byte})"),
        }
    }
}

impl Serialize for ProposalStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A decoded governance proposal.
///
/// The wire format carries no field tags: the eleven fields below are
/// decoded in exactly this order, and [`decode_proposal`] is the single
/// place that order exists. Reordering anything desynchronizes every
/// subsequent field.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: String,
    pub description: String,
    pub receiver: String,
    pub amount: BigUint,
    pub status: ProposalStatus,
    pub yes_votes: BigUint,
    pub no_votes: BigUint,
    pub created_at: u64,
    pub passed_at: u64,
    pub bulletin_post_id: u64,
}

/// Decode a nested Proposal record starting at `offset`.
///
/// Returns the final cursor so callers decoding concatenated records can
/// resume; single-record buffers pass offset 0 and ignore it.
pub fn decode_proposal(
    buf: &[u8],
    offset: usize,
    renderer: &AddressRenderer,
) -> Result<(Proposal, usize), DecodeError> {
    let (id, offset) = scalar::nested_u64(buf, offset)?;
    let (proposer, offset) = scalar::nested_pubkey(buf, offset)?;
    let (description, offset) = scalar::nested_text(buf, offset)?;
    let (receiver, offset) = scalar::nested_pubkey(buf, offset)?;
    let (amount, offset) = scalar::nested_biguint(buf, offset)?;
    let (status_byte, offset) = scalar::nested_byte(buf, offset)?;
    let (yes_votes, offset) = scalar::nested_biguint(buf, offset)?;
    let (no_votes, offset) = scalar::nested_biguint(buf, offset)?;
    let (created_at, offset) = scalar::nested_u64(buf, offset)?;
    let (passed_at, offset) = scalar::nested_u64(buf, offset)?;
    let (bulletin_post_id, offset) = scalar::nested_u64(buf, offset)?;

    let proposal = Proposal {
        id,
        proposer: renderer.render(&proposer),
        description,
        receiver: renderer.render(&receiver),
        amount,
        status: ProposalStatus::from_byte(status_byte),
        yes_votes,
        no_votes,
        created_at,
        passed_at,
        bulletin_post_id,
    };
    Ok((proposal, offset))
}
