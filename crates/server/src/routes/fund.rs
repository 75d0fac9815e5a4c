use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    handlers::fund,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/fund/stats",
            "get",
            get(fund::get_stats),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/fund/share-price",
            "get",
            get(fund::get_share_price),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/fund/config",
            "get",
            get(fund::get_config),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/fund/epochs/{epoch}/spent",
            "get",
            get(fund::get_epoch_spent),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/fund/deposit",
            "post",
            post(fund::deposit),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/fund/withdraw",
            "post",
            post(fund::withdraw),
        )
}
