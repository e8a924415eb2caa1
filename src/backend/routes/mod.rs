//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use tostar::backend::routes::create_router;
//! use tostar::backend::server::{AppState, AuthConfig};
//!
//! let app_state = AppState::in_memory(AuthConfig::new("secret"));
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
