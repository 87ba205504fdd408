//! Repository for the `events` (school calendar) table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CalendarEvent, CreateEvent};

const COLUMNS: &str = "id, title, description, category, date, created_at";

/// Provides CRUD operations for calendar events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new calendar event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<CalendarEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, description, category, date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find an event by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events in calendar order; dateless drafts sort last.
    pub async fn list(pool: &PgPool) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             ORDER BY date ASC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .fetch_all(pool)
            .await
    }
}
