//! VidyaSetu website backend
//!
//! Main application entry point

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use VidyaSetu::{
    config::Settings,
    database::{connection::create_pool, DatabaseService},
    handlers::AppContext,
    middleware::RequestLogger,
    server,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting VidyaSetu website backend...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = VidyaSetu::database::connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        acquire_timeout: std::time::Duration::from_secs(30),
        idle_timeout: Some(std::time::Duration::from_secs(600)),
        max_lifetime: Some(std::time::Duration::from_secs(1800)),
    };
    let db_pool = create_pool(&db_config).await?;

    // Run database migrations
    info!("Running database migrations...");
    VidyaSetu::database::connection::run_migrations(&db_pool).await?;

    // Initialize database service
    let database_service = DatabaseService::new(db_pool);

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(settings.clone(), database_service)?;

    let ctx = Arc::new(AppContext {
        services,
        settings,
    });
    let logger = Arc::new(RequestLogger::default());

    // Shutdown on ctrl-c
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    info!("VidyaSetu is ready!");

    server::start_server(ctx, logger, shutdown_rx).await?;

    info!("VidyaSetu has been shut down.");

    Ok(())
}
