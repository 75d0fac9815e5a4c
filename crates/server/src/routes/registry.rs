//! Route registry for dynamic endpoint introspection.
//!
//! Tracks every registered route so the root endpoint can return a list
//! of available routes.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Path prefix all fund API routes are nested under.
pub const API_VERSION: &str = "/v1";

/// Information about a registered route.
#[derive(Clone, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/proposals/{proposalId}")
    pub path: String,
    /// The HTTP method (e.g., "get", "post")
    pub method: String,
}

/// A thread-safe registry of routes.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the registry.
    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    /// Get all registered routes.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Register a route and track it in the registry. The prefix is only
    /// prepended in the registry entry; routing itself happens under a
    /// nested router.
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        prefix: &str,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        let full_path = format!("{}{}", prefix, path);
        registry.add(&full_path, method);
        self.route(path, handler)
    }
}
