//! Notification record models and DTOs.

use aula_core::recipient::Recipient;
use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// `recipient` is kept as raw JSON: rows may predate the current
/// descriptor shape, so decoding is deferred to the fan-out, which
/// tolerates malformed values.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub sender_id: Option<DbId>,
    pub recipient: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Deserialize)]
pub struct CreateNotification {
    pub title: String,
    pub description: String,
    pub sender_id: Option<DbId>,
    pub recipient: Recipient,
}
