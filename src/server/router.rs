use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    controller,
    error::AppError,
    middleware::cors::{self, OriginWhitelist},
    realtime,
    state::AppState,
};

/// Builds the application router.
///
/// Mounts the four resource collections under the configured API base
/// path, the SSE endpoint, and the 404 fallback, then wraps the whole
/// surface in the CORS admission check, the CORS header layer, and
/// request logging. Request processing order, outermost first: logging,
/// origin admission, CORS headers, routes, fallback.
pub fn router(config: &Config) -> Router<AppState> {
    let whitelist = Arc::new(OriginWhitelist::parse(&config.whitelisted_origins));
    let base = &config.api_base_path;

    Router::new()
        .nest(&format!("{}/classes", base), controller::class::router())
        .nest(&format!("{}/bookings", base), controller::booking::router())
        .nest(&format!("{}/blocks", base), controller::block::router())
        .nest(&format!("{}/feedback", base), controller::feedback::router())
        .route("/events", get(realtime::sse::event_stream))
        .fallback(not_found)
        .layer(cors::cors_layer(whitelist.clone()))
        .layer(axum::middleware::from_fn_with_state(
            whitelist,
            cors::admit_origin,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Terminal handler for unmatched routes.
///
/// Raises a not-found error carrying the original URL, which the error
/// pipeline renders with status 404.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("🔍 - Not Found - {}", uri))
}
