//! Backend Module
//!
//! All server-side code: the Axum HTTP server, authentication, the
//! Postgres stores and the HTTP handlers over the relationship ledger.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, JWT tokens, signup/login/profile handlers
//! - **`relationships`** - Friend handlers and the Postgres edge store
//! - **`letters`** - Letter handlers and stores
//! - **`articles`** - Article handlers and stores
//! - **`comments`** - Comment handlers and stores
//! - **`communities`** - Community handlers and stores
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend-specific error types
//! - **`extract`** - Extractors whose rejections are `BackendError`
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and profiles
//! ├── relationships/  - Friend endpoints
//! ├── letters/        - Letter endpoints
//! ├── articles/       - Article endpoints
//! ├── comments/       - Comment endpoints
//! ├── communities/    - Community endpoints
//! ├── middleware/     - Request middleware
//! ├── error/          - Error types
//! └── extract.rs      - JSON, query and path extractors
//! ```
//!
//! # State Management
//!
//! `AppState` carries the user directory, the relationship ledger, the
//! letter, article, comment and community stores and the auth settings. The stores are `Arc<dyn Trait>`
//! objects, backed by Postgres when `DATABASE_URL` is set and by in-memory
//! maps otherwise.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` implements
//! `IntoResponse` and renders a JSON error body.
//!
//! # Example
//!
//! ```rust,no_run
//! use tostar::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await;
//! // Use app with axum::serve
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Request extractors with JSON rejections
pub mod extract;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Friend endpoints
pub mod relationships;

/// Letter endpoints
pub mod letters;

/// Article endpoints
pub mod articles;

/// Comment endpoints
pub mod comments;

/// Community endpoints
pub mod communities;

pub use error::BackendError;
pub use server::{create_app, AppState};
