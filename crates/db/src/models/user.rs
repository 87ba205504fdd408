//! Staff account models and DTOs.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    /// Registered device tokens, append-only. Deduplicated only at read
    /// time by the recipient resolver.
    pub fcm_tokens: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a staff account.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// DTO for registering a device token against an account.
#[derive(Debug, Deserialize)]
pub struct RegisterDevice {
    pub token: String,
}
