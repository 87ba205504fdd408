//! Student models and DTOs.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
///
/// `grade_level` is the cohort the student belongs to (e.g. "Tercer
/// Grado"); course membership is derived through the grade-level
/// assignment map, never stored per student.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub grade_level: String,
    pub parent_name: Option<String>,
    pub enrollment_year: Option<i32>,
    pub is_active: bool,
    pub fcm_tokens: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for enrolling a student.
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub grade_level: String,
    pub parent_name: Option<String>,
    pub enrollment_year: Option<i32>,
}
