use thiserror::Error;

/// Errors produced while decoding contract return data.
///
/// Decoding a record is all-or-nothing: on any error no partial value is
/// returned. Unrecognized status/direction bytes are NOT errors; they
/// surface as `Unknown(n)` variants on the decoded value itself, since the
/// contract schema can grow new variants before this decoder learns them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A read would exceed the buffer bound.
    #[error("truncated input: need {need} bytes, have {have}")]
    Truncated {
        /// Minimum buffer length the read required.
        need: usize,
        /// Actual buffer length.
        have: usize,
    },

    /// A text field's bytes are not valid UTF-8.
    #[error("text field is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The outer base64 framing is malformed.
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// A top-level u64 buffer is wider than 8 bytes.
    ///
    /// The runtime strips leading zeros from top-level integers, so a
    /// well-formed u64 slot is never wider than 8 bytes; anything wider
    /// would overflow u64 and is rejected instead of wrapped.
    #[error("top-level u64 too wide: {len} bytes")]
    U64TooWide { len: usize },
}
