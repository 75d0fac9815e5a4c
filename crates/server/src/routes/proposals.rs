use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    handlers::proposals,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/proposals",
            "get",
            get(proposals::get_proposals),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals",
            "post",
            post(proposals::submit_proposal),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/active",
            "get",
            get(proposals::get_active_proposals),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/votes",
            "get",
            get(proposals::get_vote_records),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/votes/{address}",
            "get",
            get(proposals::get_has_voted),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/votes",
            "post",
            post(proposals::vote),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/finalize",
            "post",
            post(proposals::finalize_voting),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/execute",
            "post",
            post(proposals::execute_proposal),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/cancel",
            "post",
            post(proposals::cancel_proposal),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}/expire",
            "post",
            post(proposals::expire_proposal),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/proposals/{proposalId}",
            "get",
            get(proposals::get_proposal),
        )
}
