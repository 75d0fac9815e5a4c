use axum::{Router, routing::get};

use crate::{
    handlers::members,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/members",
            "get",
            get(members::get_members),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/members/{address}/shares",
            "get",
            get(members::get_member_shares),
        )
}
