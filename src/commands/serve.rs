//! The `serve` command: open the store, assemble the app, listen.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Bring the site up on the configured address.
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    // Opens the database and applies pending migrations
    let db = Arc::new(Database::connect(&config).await);

    let app_state = AppState::from_config(db, &config)?;
    tracing::info!("Templates loaded from {}", config.templates_dir);

    let app = create_router(app_state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
