//! Wire-format builders for canned contract responses.
//!
//! Everything here produces exactly what the contract runtime would
//! return: top-level slots carry minimal big-endian bytes, nested
//! records carry fixed-width and length-prefixed fields back to back.

use base64::{Engine, engine::general_purpose::STANDARD};
use num_bigint::BigUint;

/// Base64-encode raw slot bytes.
pub fn slot(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Minimal big-endian bytes of a top-level u64 (leading zeros stripped,
/// zero is empty).
pub fn top_level_u64(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    bytes[skip..].to_vec()
}

/// Big-endian bytes of a top-level big integer (zero is empty).
pub fn top_level_biguint(value: &BigUint) -> Vec<u8> {
    if *value == BigUint::from(0u8) {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

pub fn push_nested_u64(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&value.to_be_bytes());
}

pub fn push_nested_biguint(buf: &mut Vec<u8>, value: &BigUint) {
    let bytes = top_level_biguint(value);
    buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    buf.extend_from_slice(&bytes);
}

pub fn push_nested_text(buf: &mut Vec<u8>, text: &str) {
    buf.extend_from_slice(&(text.len() as u32).to_be_bytes());
    buf.extend_from_slice(text.as_bytes());
}

/// Field values for an encoded proposal fixture.
pub struct ProposalFixture {
    pub id: u64,
    pub proposer: [u8; 32],
    pub description: String,
    pub receiver: [u8; 32],
    pub amount: BigUint,
    pub status: u8,
    pub yes_votes: BigUint,
    pub no_votes: BigUint,
    pub created_at: u64,
    pub passed_at: u64,
    pub bulletin_post_id: u64,
}

impl Default for ProposalFixture {
    fn default() -> Self {
        Self {
            id: 1,
            proposer: [0x11; 32],
            description: "Fund the relay upgrade".to_string(),
            receiver: [0x22; 32],
            amount: BigUint::from(10u8).pow(18) * BigUint::from(1500u32),
            status: 0,
            yes_votes: BigUint::from(0u8),
            no_votes: BigUint::from(0u8),
            created_at: 1_700_000_000,
            passed_at: 0,
            bulletin_post_id: 42,
        }
    }
}

impl ProposalFixture {
    /// Nested record bytes in contract field order.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        push_nested_u64(&mut buf, self.id);
        buf.extend_from_slice(&self.proposer);
        push_nested_text(&mut buf, &self.description);
        buf.extend_from_slice(&self.receiver);
        push_nested_biguint(&mut buf, &self.amount);
        buf.push(self.status);
        push_nested_biguint(&mut buf, &self.yes_votes);
        push_nested_biguint(&mut buf, &self.no_votes);
        push_nested_u64(&mut buf, self.created_at);
        push_nested_u64(&mut buf, self.passed_at);
        push_nested_u64(&mut buf, self.bulletin_post_id);
        buf
    }

    pub fn slot(&self) -> String {
        slot(&self.encode())
    }
}

/// Nested vote record bytes: voter, direction byte, weight.
pub fn encode_vote_record(voter: [u8; 32], direction: u8, weight: &BigUint) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&voter);
    buf.push(direction);
    push_nested_biguint(&mut buf, weight);
    buf
}
