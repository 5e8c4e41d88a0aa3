//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{DbAdapter, DbSessionCheck, LocalBlobStore},
    config::Config,
    error::ApiError,
    web::{self, state::AppState, ApiDoc},
};
use axum::{extract::DefaultBodyLimit, Router};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Database & Run Migrations ---
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // --- 3. Initialize Adapters ---
    let blobs = Arc::new(
        LocalBlobStore::new(config.uploads_dir.clone(), config.public_base_url.clone()).await?,
    );
    let db_adapter = Arc::new(DbAdapter::new(db_pool.clone(), blobs.clone()));
    info!("Running database migrations...");
    db_adapter.run_migrations().await?;
    info!("Database migrations complete.");

    let session_check = Arc::new(DbSessionCheck::new(db_pool.clone()));

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        stretches: db_adapter.clone(),
        weeks: db_adapter.clone(),
        plans: db_adapter,
        sessions: session_check,
        blobs,
    });

    // --- 5. Create the Web Router ---
    let api_router = web::router(app_state)
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CorsLayer::permissive());

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
