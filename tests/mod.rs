//! Test suite for Tostar
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
