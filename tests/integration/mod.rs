//! Integration tests against the full router and against Postgres

pub mod api;
pub mod database;
