//! Cross-origin admission control.
//!
//! Two cooperating pieces: `admit_origin`, a middleware that checks every
//! request's `Origin` header against the configured whitelist and raises
//! `AppError::CorsDenied` into the error pipeline on a miss, and
//! `cors_layer`, the `tower-http` layer that emits permissive CORS response
//! headers for the same whitelist. Denied requests never reach the routing
//! table and their responses carry no CORS headers.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::ORIGIN,
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::error::AppError;

/// Set of origins allowed to call the API.
///
/// Built once at startup from the comma-separated configuration value:
/// entries are trimmed, empty entries dropped. Membership is exact string
/// equality after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginWhitelist {
    origins: HashSet<String>,
}

impl OriginWhitelist {
    /// Builds a whitelist from a comma-separated origin spec.
    ///
    /// An empty spec yields an empty whitelist, which rejects every origin.
    pub fn parse(spec: &str) -> Self {
        let origins = spec
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect();

        Self { origins }
    }

    /// Whether the given `Origin` header value is admitted.
    ///
    /// A request without an `Origin` header never matches any entry, so
    /// non-browser clients are rejected unless they present a whitelisted
    /// origin explicitly.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            Some(origin) => self.origins.contains(origin.trim()),
            None => false,
        }
    }
}

/// Admission check run ahead of the routing table.
///
/// Denials are not answered in place: they raise `AppError::CorsDenied`
/// so the standard error pipeline shapes the response.
pub async fn admit_origin(
    State(whitelist): State<Arc<OriginWhitelist>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok());

    if whitelist.allows(origin) {
        Ok(next.run(request).await)
    } else {
        Err(AppError::CorsDenied)
    }
}

/// Response-header layer mirroring the admission whitelist.
pub fn cors_layer(whitelist: Arc<OriginWhitelist>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .map(|value| whitelist.allows(Some(value)))
                .unwrap_or(false)
        }))
        .allow_methods(Any)
        .allow_headers(Any)
}
