//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process app over in-memory stores
//! - Authentication test helpers
//! - Postgres fixtures for the database tests

pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
