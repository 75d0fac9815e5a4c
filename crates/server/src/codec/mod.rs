//! Binary codec for Autonomous Fund contract return values.
//!
//! The contract runtime serializes return data with two incompatible
//! conventions that share one numeric/type system:
//!
//! - **Top-level**: the whole buffer is one value, no framing. Used for
//!   isolated query return slots (the caller already split the slots).
//! - **Nested**: self-delimited fields (fixed widths or 4-byte big-endian
//!   length prefixes) packed back-to-back inside one buffer. Used for
//!   struct-valued return slots.
//!
//! The wire format carries no field tags or type information; the schema
//! is known only to the caller. Nested decoders therefore thread an
//! explicit byte offset: each returns `(value, new_offset)` where
//! `new_offset` is exactly the old offset plus the bytes consumed. Reads
//! past the end of the buffer fail with [`DecodeError::Truncated`] rather
//! than short-reading.
//!
//! Every entry point receives base64 text from the backend; decode with
//! [`scalar::decode_base64`] first, then apply the field decoders.

pub mod address;
pub mod error;
pub mod proposal;
pub mod scalar;
pub mod vote;

pub use address::{AddressRenderer, encode_address, encode_address_hex};
pub use error::DecodeError;
pub use proposal::{Proposal, ProposalStatus, decode_proposal};
pub use vote::{VoteDirection, VoteRecord, decode_vote_record};
