//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, making it the single place where response status and body are
//! finalized — no handler or middleware formats its own error output.
//!
//! Every error renders as `{ "message": ..., "stack": ... }`. The `stack` field
//! carries the error's debug representation in development and the fixed
//! redaction marker in production.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorBody,
    server::{config::Environment, error::config::ConfigError},
};

/// Marker substituted for the diagnostic trace in production responses.
pub const REDACTED_STACK: &str = "🥞";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Variants that carry an
/// explicit status (404, 400, 409) keep it; everything else renders as 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Request origin is not on the configured whitelist.
    #[error("Not allowed by CORS")]
    CorsDenied,

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with current resource state (e.g. a full class).
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status for this error.
    ///
    /// Variants without an explicitly assigned status default to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the response body for this error under the given deployment mode.
    ///
    /// The `message` is the error's display text. The `stack` is the debug
    /// representation of the full error (variant, payload, wrapped source) in
    /// development, and the redaction marker in production.
    pub fn to_body(&self, environment: Environment) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
            stack: if environment.is_production() {
                REDACTED_STACK.to_string()
            } else {
                format!("{:?}", self)
            },
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// This is the terminal stage of the request pipeline: CORS denials, 404
/// fallback errors, and any error a controller or service raises all land
/// here. Server-side failures are logged with full details before the
/// (possibly redacted) body goes to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
        }

        let body = self.to_body(Environment::global());

        (status, Json(body)).into_response()
    }
}
