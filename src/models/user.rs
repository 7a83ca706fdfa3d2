//! User data models and API request/response types.
//!
//! This module defines:
//! - `User`: Database entity representing a registered user
//! - `RegisterRequest` / `LoginRequest`: Request bodies
//! - `UserResponse`: Response body returned to clients (no password hash)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The email is stored trimmed and lowercased,
/// so the table's UNIQUE constraint is effectively case-insensitive.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Display name, trimmed
    pub name: String,

    /// Normalized email address (lowercase, trimmed)
    pub email: String,

    /// Salted password hash, `<salt-hex>$<sha256-hex>`
    ///
    /// Never serialized; `UserResponse` omits it.
    pub password_hash: String,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

/// Request body for registering a new user.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "Ada@Example.com",
///   "password": "correct horse"
/// }
/// ```
///
/// All three fields are required and must be non-blank after trimming.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for user endpoints.
///
/// Mirrors `User` minus the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
