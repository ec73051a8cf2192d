use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Routing table of the analytics service.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/status", get(handlers::status::status))
        // ========================================
        // ANALYTICS ROUTES (PROTECTED)
        // ========================================
        .route(
            "/api/analytics/top-items",
            get(handlers::analytics::top_items)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/analytics/spend-over-time",
            get(handlers::analytics::spend_over_time)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/analytics/vendors",
            get(handlers::analytics::vendors)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/refresh",
            post(handlers::analytics::refresh)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // DASHBOARD PREVIEW ROUTES (PUBLIC)
        // ========================================
        .route("/api/dashboard/preview", get(handlers::dashboard::preview))
        .route(
            "/api/dashboard/vendor-summary",
            get(handlers::dashboard::vendor_summary),
        )
}
