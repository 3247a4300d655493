//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! a broadcast event bus for pushing real-time updates over SSE.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - CORS origin admission ahead of the routing table
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB connection, event bus)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration, fallback, and layers
//! - **Scheduler** (`scheduler/`) - Cron jobs for automated tasks (hold expiry, reminders)
//! - **Realtime** (`realtime/`) - Event bus and the SSE endpoint
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Middleware** admits or rejects the request's origin
//! 2. **Router** routes to the appropriate controller (or the 404 fallback)
//! 3. **Controller** deserializes DTOs, calls the service, shapes the response
//! 4. **Service** executes business logic, emits real-time events
//! 5. **Data** queries the database, converts entities to domain models
//!
//! Every failure along the way funnels into `error::AppError`, the single
//! place where response status and body are finalized.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod realtime;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
