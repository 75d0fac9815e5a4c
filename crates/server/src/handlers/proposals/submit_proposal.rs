use axum::{Json, extract::State};
use tracing::info;

use super::types::{ProposalsError, SubmitProposalRequest};
use crate::backend::CallArg;
use crate::handlers::common::{SubmitResponse, parse_amount, validate_address};
use crate::state::AppState;

/// Handler for POST /proposals
///
/// Argument order matches the submitProposal endpoint: description,
/// receiver, amount, bulletin post id.
pub async fn submit_proposal(
    State(state): State<AppState>,
    Json(body): Json<SubmitProposalRequest>,
) -> Result<Json<SubmitResponse>, ProposalsError> {
    validate_address(&body.receiver)?;
    let amount =
        parse_amount(&body.amount).ok_or_else(|| ProposalsError::InvalidAmount(body.amount.clone()))?;

    let receipt = state
        .backend
        .call(
            "submitProposal",
            &[
                CallArg::Str(body.description.clone()),
                CallArg::Addr(body.receiver.clone()),
                CallArg::BigUint(amount),
                CallArg::U64(body.bulletin_post_id),
            ],
            None,
        )
        .await?;
    info!(
        receiver = %body.receiver,
        bulletin_post_id = body.bulletin_post_id,
        tx_hash = ?receipt.tx_hash,
        "proposal submitted"
    );

    Ok(Json(SubmitResponse {
        tx_hash: receipt.tx_hash,
    }))
}
