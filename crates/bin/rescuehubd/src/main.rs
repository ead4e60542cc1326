//! # rescuehubd: rescuehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Seed the demo catalogue when enabled and the database is empty
//! - Build the axum router with the CORS policy and serve it
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer, no domain logic belongs here.

mod config;
mod seed;

use rescuehub_adapter_http_axum::state::AppState;
use rescuehub_adapter_http_axum::{cors, router};
use rescuehub_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteDogRepository, SqliteOrganizationRepository,
};
use rescuehub_app::services::dog_service::DogService;
use rescuehub_app::services::organization_service::OrganizationService;
use rescuehub_app::services::statistics_service::StatisticsService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.log_filter())?)
        .init();
    tracing::info!(
        environment = %config.environment,
        testing = config.testing,
        "starting rescuehubd"
    );

    let cors_settings = config.cors_settings()?;

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let organization_repo = SqliteOrganizationRepository::new(pool.clone());
    let dog_repo = SqliteDogRepository::new(pool);

    // Services
    let organization_service = OrganizationService::new(organization_repo.clone());
    let dog_service = DogService::new(dog_repo.clone(), organization_repo.clone());
    let statistics_service = StatisticsService::new(dog_repo, organization_repo);

    if config.demo.enabled {
        seed::demo_catalogue(&organization_service, &dog_service).await?;
    }

    // HTTP
    let state = AppState::new(organization_service, dog_service, statistics_service);
    let app = router::build(state).layer(cors::layer(&cors_settings));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "rescuehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("rescuehubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
