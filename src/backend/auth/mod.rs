//! Authentication Module
//!
//! This module handles user authentication, registration, profiles and
//! session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model and the `UserDirectory` stores
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for auth and profile endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: User provides username, email and password → User created → JWT token returned
//! 2. **Login**: User provides username (or email) and password → Credentials verified → JWT token returned
//! 3. **Get Me**: User provides JWT token → Token verified → User info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after `TOKEN_TTL_DAYS` (30 by default)
//! - Invalid credentials return 401 (no information leakage)

/// User data model and storage
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, search_users, signup, update_profile};
