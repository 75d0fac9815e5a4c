//! Helpers shared across handler groups.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

use crate::codec::{self, DecodeError, address::HRP};

/// Creates a JSON error response with the given status code and message.
pub(crate) fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    let body = Json(json!({ "error": message }));
    (status, body).into_response()
}

/// Macro to implement IntoResponse for error types with status code mapping.
///
/// Usage:
/// ```ignore
/// impl_error_response!(MyError,
///     InvalidAmount(_) => BAD_REQUEST,
///     NotFound(_) => NOT_FOUND,
///     _ => BAD_GATEWAY
/// );
/// ```
macro_rules! impl_error_response {
    ($error_type:ty, $($variant:pat => $status:ident),+ $(,)?) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                let status = match &self {
                    $($variant => axum::http::StatusCode::$status,)+
                };
                crate::handlers::common::error_response(status, self.to_string())
            }
        }
    };
}
pub(crate) use impl_error_response;

/// Response for every transaction-submitting endpoint.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

/// The query returned fewer slots than the view's contract promises.
#[derive(Debug, Error)]
#[error("contract returned {got} value(s), expected {expected}")]
pub struct MissingReturnData {
    pub expected: usize,
    pub got: usize,
}

/// Base64-decode slot `index`, failing if the slot list is too short.
pub fn decoded_slot(slots: &[String], index: usize) -> Result<Vec<u8>, SlotError> {
    let slot = slots.get(index).ok_or(MissingReturnData {
        expected: index + 1,
        got: slots.len(),
    })?;
    Ok(codec::scalar::decode_base64(slot)?)
}

#[derive(Debug, Error)]
pub enum SlotError {
    #[error(transparent)]
    Missing(#[from] MissingReturnData),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Parse a client-supplied decimal string into an unsigned big integer.
pub fn parse_amount(input: &str) -> Option<num_bigint::BigUint> {
    if input.is_empty() {
        return None;
    }
    num_bigint::BigUint::parse_bytes(input.as_bytes(), 10)
}

/// Validation error for client-supplied addresses.
#[derive(Debug, Error)]
#[error("invalid address '{0}': expected a claw1... bech32 address")]
pub struct AddressValidationError(pub String);

/// Check that a client-supplied address is a well-formed claw1 bech32
/// string with a 32-byte payload.
pub fn validate_address(address: &str) -> Result<(), AddressValidationError> {
    let (hrp, payload) =
        bech32::decode(address).map_err(|_| AddressValidationError(address.to_string()))?;
    if hrp != HRP || payload.len() != codec::scalar::PUBKEY_WIDTH {
        return Err(AddressValidationError(address.to_string()));
    }
    Ok(())
}
