//! Classboard - class booking backend.
//!
//! Startup is strictly ordered and fail-fast: configuration, then the
//! database, then the scheduler and HTTP listener. A failed database
//! connection terminates the process with exit code 1 so the operator's
//! supervisor can restart it.

mod model;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::{Config, Environment},
    error::AppError,
    realtime::EventBus,
    router, scheduler, startup,
    state::AppState,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    if let Err(error) = run().await {
        tracing::error!("Unhandled error during startup: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    Environment::set_global(config.environment);

    tracing::info!("Attempting connection to database...");
    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(error) => {
            tracing::error!("Error connecting to the database: {}", error);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to database");

    let events = EventBus::new(1024);

    // Maintenance jobs read and write bookings, so the scheduler only
    // starts once the store connection is up.
    let scheduler_db = db.clone();
    let scheduler_events = events.clone();
    tokio::spawn(async move {
        if let Err(error) =
            scheduler::booking_maintenance::start_scheduler(scheduler_db, scheduler_events).await
        {
            tracing::error!("Booking maintenance scheduler error: {}", error);
        }
    });

    let app = router::router(&config).with_state(AppState::new(db, events));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind to {}: {}", addr, e)))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
