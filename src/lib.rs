//! Tostar - Main Library
//!
//! Tostar is a memory-sharing social backend built with Rust: users register,
//! authenticate with JWT, befriend each other and write private letters.
//!
//! # Module Structure
//!
//! - **`ledger`** - The friendship graph
//!   - Canonical ordering of the two endpoints of every friendship
//!   - `EdgeStore` abstraction with an in-memory backend
//!
//! - **`shared`** - Types shared between storage and HTTP layers
//!   - Error types
//!   - Friend and letter request/response bodies
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and middleware
//!   - Authentication (bcrypt + JWT) and the user directory
//!   - Postgres stores for users, friendships and letters
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - the HTTP server and everything it needs
//!
//! # Usage
//!
//! ```rust,no_run
//! use tostar::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::error` for validation and storage errors
//! - `ledger::LedgerError` for friendship rule violations
//! - `backend::error::BackendError` for HTTP responses

/// Friendship graph
pub mod ledger;

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
