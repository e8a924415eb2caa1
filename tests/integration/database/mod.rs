//! Postgres integration tests
//!
//! Skipped unless `DATABASE_URL` is set.

pub mod migrations_test;
