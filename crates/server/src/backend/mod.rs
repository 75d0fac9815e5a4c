//! Contract access abstraction.
//!
//! Handlers never shell out directly; they go through [`ContractBackend`]
//! so tests can substitute a mock that returns canned base64 slots. The
//! production implementation, [`ClawpyBackend`], drives the `clawpy` CLI
//! as a subprocess.

pub mod clawpy;

use std::fmt;

use async_trait::async_trait;
use num_bigint::BigUint;
use thiserror::Error;

pub use clawpy::ClawpyBackend;

/// A positional contract argument, rendered to the CLI's text form.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    U64(u64),
    BigUint(BigUint),
    /// Free text; rendered with the `str:` prefix the CLI uses to
    /// distinguish text from numbers.
    Str(String),
    /// A bech32 address, passed through verbatim.
    Addr(String),
    Bool(bool),
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U64(n) => write!(f, "{n}"),
            Self::BigUint(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "str:{s}"),
            Self::Addr(a) => write!(f, "{a}"),
            Self::Bool(true) => write!(f, "1"),
            Self::Bool(false) => write!(f, "0"),
        }
    }
}

/// Outcome of a submitted write transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    /// Transaction hash when the CLI reported one.
    pub tx_hash: Option<String>,
}

#[derive(Debug, Error)]
pub enum BackendError {
    /// The subprocess could not be spawned at all.
    #[error("failed to spawn contract CLI: {0}")]
    Spawn(#[source] std::io::Error),

    /// The subprocess ran and exited non-zero.
    #[error("contract CLI exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// The subprocess exited zero but its stdout was not parseable.
    #[error("malformed contract CLI response: {0}")]
    MalformedResponse(String),
}

/// Read and write access to the fund contract.
///
/// `query` returns the raw base64 return-data slots in contract order;
/// decoding is the caller's job. `call` signs and broadcasts a
/// transaction and does not wait for execution results.
#[async_trait]
pub trait ContractBackend: Send + Sync {
    async fn query(&self, function: &str, args: &[CallArg]) -> Result<Vec<String>, BackendError>;

    async fn call(
        &self,
        function: &str,
        args: &[CallArg],
        value: Option<&BigUint>,
    ) -> Result<SubmitReceipt, BackendError>;
}
