//! Repository for the `notifications` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};

const COLUMNS: &str = "id, title, description, sender_id, recipient, created_at";

/// Provides CRUD operations for notification records.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a new notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        // Recipient serialization cannot fail for this enum; a JSON null
        // would decode back as Unknown and resolve to zero recipients.
        let recipient =
            serde_json::to_value(&input.recipient).unwrap_or(serde_json::Value::Null);

        let query = format!(
            "INSERT INTO notifications (title, description, sender_id, recipient)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sender_id)
            .bind(recipient)
            .fetch_one(pool)
            .await
    }

    /// Find a notification by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notifications, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
