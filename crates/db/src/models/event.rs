//! Calendar event models and DTOs.

use aula_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// `date` is nullable: dateless drafts are allowed, and the push fan-out
/// skips them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CalendarEvent {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for creating a calendar event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub date: Option<NaiveDate>,
}

/// Event categories accepted by the calendar.
///
/// These must match the CHECK constraint on `events.category`.
pub const EVENT_CATEGORIES: [&str; 4] = ["reunion", "academico", "feriado", "actividad"];
