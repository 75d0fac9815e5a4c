//! Primitive decoders for the two encoding conventions.
//!
//! Top-level decoders consume a whole buffer; nested decoders take
//! `(buf, offset)` and return `(value, new_offset)`. Callers must thread
//! the offset sequentially — the format has no gaps and no padding.

use base64::{Engine, engine::general_purpose::STANDARD};
use num_bigint::BigUint;

use super::error::DecodeError;

/// Byte width of a nested u64 field.
const NESTED_U64_WIDTH: usize = 8;

/// Byte width of a nested length prefix.
const LENGTH_PREFIX_WIDTH: usize = 4;

/// Byte width of a serialized public key.
pub const PUBKEY_WIDTH: usize = 32;

/// Decode a base64 return-data slot into raw bytes.
pub fn decode_base64(input: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(input)?)
}

/// Bounds-checked view of `len` bytes at `offset`.
///
/// Naive slicing (`&buf[offset..offset + len]`) panics on out-of-range
/// and Python-style clamped slicing silently short-reads; both are wrong
/// here, so every decoder goes through this helper.
fn take(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], DecodeError> {
    buf.get(offset..offset + len).ok_or(DecodeError::Truncated {
        need: offset + len,
        have: buf.len(),
    })
}

// ================================================================================================
// Top-level decoders
// ================================================================================================

/// Decode a top-level u64: raw big-endian bytes spanning the entire buffer.
///
/// The runtime drops leading zeros, so the buffer may be 0 to 8 bytes
/// wide; an empty buffer is zero.
pub fn top_level_u64(buf: &[u8]) -> Result<u64, DecodeError> {
    if buf.len() > NESTED_U64_WIDTH {
        return Err(DecodeError::U64TooWide { len: buf.len() });
    }
    Ok(buf.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

/// Decode a top-level unsigned big integer: raw big-endian bytes spanning
/// the entire buffer. An empty buffer is zero.
pub fn top_level_biguint(buf: &[u8]) -> BigUint {
    BigUint::from_bytes_be(buf)
}

/// Decode a top-level bool: empty buffer or a zero byte is false.
pub fn top_level_bool(buf: &[u8]) -> bool {
    buf.iter().any(|b| *b != 0)
}

// ================================================================================================
// Nested decoders
// ================================================================================================

/// Decode a nested u64: fixed 8 bytes, big-endian.
pub fn nested_u64(buf: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    let bytes: [u8; NESTED_U64_WIDTH] = take(buf, offset, NESTED_U64_WIDTH)?
        .try_into()
        .expect("slice length checked");
    Ok((u64::from_be_bytes(bytes), offset + NESTED_U64_WIDTH))
}

/// Decode a nested unsigned big integer: 4-byte big-endian length prefix,
/// then that many big-endian value bytes. A zero-length prefix is zero.
pub fn nested_biguint(buf: &[u8], offset: usize) -> Result<(BigUint, usize), DecodeError> {
    let (len, offset) = length_prefix(buf, offset)?;
    let value = BigUint::from_bytes_be(take(buf, offset, len)?);
    Ok((value, offset + len))
}

/// Decode a nested text field: 4-byte big-endian length prefix, then that
/// many UTF-8 bytes.
pub fn nested_text(buf: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    let (len, offset) = length_prefix(buf, offset)?;
    let text = String::from_utf8(take(buf, offset, len)?.to_vec())?;
    Ok((text, offset + len))
}

/// Decode a nested bool: 1 byte, any non-zero value is true.
pub fn nested_bool(buf: &[u8], offset: usize) -> Result<(bool, usize), DecodeError> {
    let (byte, offset) = nested_byte(buf, offset)?;
    Ok((byte != 0, offset))
}

/// Decode a single raw byte (enum discriminants).
pub fn nested_byte(buf: &[u8], offset: usize) -> Result<(u8, usize), DecodeError> {
    let byte = take(buf, offset, 1)?[0];
    Ok((byte, offset + 1))
}

/// Decode a nested address: fixed 32 raw bytes of public key.
///
/// Rendering to a string is the address codec's job; this only extracts
/// the key material.
pub fn nested_pubkey(buf: &[u8], offset: usize) -> Result<([u8; PUBKEY_WIDTH], usize), DecodeError> {
    let key: [u8; PUBKEY_WIDTH] = take(buf, offset, PUBKEY_WIDTH)?
        .try_into()
        .expect("slice length checked");
    Ok((key, offset + PUBKEY_WIDTH))
}

fn length_prefix(buf: &[u8], offset: usize) -> Result<(usize, usize), DecodeError> {
    let bytes: [u8; LENGTH_PREFIX_WIDTH] = take(buf, offset, LENGTH_PREFIX_WIDTH)?
        .try_into()
        .expect("slice length checked");
    Ok((u32::from_be_bytes(bytes) as usize, offset + LENGTH_PREFIX_WIDTH))
}

// ================================================================================================
// Tests
// ================================================================================================
