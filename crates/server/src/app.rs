use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    logging::http_logger_middleware,
    routes::{self, API_VERSION},
    state::AppState,
};

pub fn create_app(state: AppState) -> Router {
    let registry = state.route_registry.clone();

    let v1 = Router::new()
        .merge(routes::health::routes(&registry))
        .merge(routes::fund::routes(&registry))
        .merge(routes::members::routes(&registry))
        .merge(routes::proposals::routes(&registry));

    Router::new()
        .route("/", get(routes::root::root_handler))
        .nest(API_VERSION, v1)
        .layer(middleware::from_fn(http_logger_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
