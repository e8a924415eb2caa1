/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication
 * and profile handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Sign up request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Name of the remembered pet
    #[serde(default)]
    pub pet_name: Option<String>,
}

/// Login request
///
/// Contains the username (or email) and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's username (can also be email)
    pub username: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Does not include password hash or other sensitive information.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
    /// Name of the remembered pet
    pub pet_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            pet_name: user.pet_name,
        }
    }
}

/// Profile edit request
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateProfileRequest {
    /// New pet name; `null` clears it
    pub pet_name: Option<String>,
}

/// Query parameters of the pet-name search
#[derive(Deserialize, Debug, Default)]
pub struct SearchUsersQuery {
    #[serde(default)]
    pub pet_name: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// One page of search results
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchUsersResponse {
    pub users: Vec<PublicUser>,
    pub page: u32,
    pub size: u32,
}

/// A user as seen by other users
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub pet_name: Option<String>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            pet_name: user.pet_name,
        }
    }
}
