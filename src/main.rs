mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::checkup_reminders, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    // Seed an admin account from the environment, or warn when none exists
    startup::check_for_admin(&db, &config).await?;

    let scheduler_db = db.clone();
    let interval_days = config.checkup_interval_days;
    tokio::spawn(async move {
        if let Err(e) = checkup_reminders::start_scheduler(scheduler_db, interval_days).await {
            tracing::error!("Checkup reminder scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, config.checkup_interval_days))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
