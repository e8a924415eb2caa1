/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * opening the database, assembling `AppState` and building the router.
 *
 * # Initialization Process
 *
 * 1. Load the optional database (runs migrations)
 * 2. Build `AppState` on Postgres, or on in-memory stores without a database
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: Server runs on in-memory stores
/// - Migration failures: Logged but don't prevent startup
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing Tostar backend server");

    let app_state = match load_database(config).await {
        Some(pool) => {
            tracing::info!("Using PostgreSQL storage");
            AppState::with_postgres(pool, config.auth.clone())
        }
        None => {
            tracing::warn!("Using in-memory storage; data will not survive a restart");
            AppState::in_memory(config.auth.clone())
        }
    };

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
