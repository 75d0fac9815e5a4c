//! Decoder for the per-proposal VoteRecord list.

use std::fmt;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use super::address::AddressRenderer;
use super::error::DecodeError;
use super::scalar;

/// Which way a member voted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Yes,
    No,
    Unknown(u8),
}

impl VoteDirection {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Self::Yes,
            1 => Self::No,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::Unknown(byte) => write!(f, "Unknown({byte})"),
        }
    }
}

impl Serialize for VoteDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One member's vote on one proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteRecord {
    pub voter: String,
    pub direction: VoteDirection,
    pub weight: BigUint,
}

/// Decode a nested VoteRecord starting at `offset`.
///
/// The contract returns votes as one concatenated buffer per proposal;
/// callers loop, feeding each returned offset back in until the buffer is
/// exhausted.
pub fn decode_vote_record(
    buf: &[u8],
    offset: usize,
    renderer: &AddressRenderer,
) -> Result<(VoteRecord, usize), DecodeError> {
    let (voter, offset) = scalar::nested_pubkey(buf, offset)?;
    let (direction_byte, offset) = scalar::nested_byte(buf, offset)?;
    let (weight, offset) = scalar::nested_biguint(buf, offset)?;

    let record = VoteRecord {
        voter: renderer.render(&voter),
        direction: VoteDirection::from_byte(direction_byte),
        weight,
    };
    Ok((record, offset))
}
