//! Course and grade-assignment models.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a course.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub name: String,
}

/// A row from the `grade_course_assignments` table: the set of courses
/// taught in one grade level.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GradeAssignment {
    pub grade_level: String,
    pub course_ids: Vec<DbId>,
    pub updated_at: Timestamp,
}

/// DTO for replacing a grade level's course assignment.
#[derive(Debug, Deserialize)]
pub struct UpdateGradeAssignment {
    pub course_ids: Vec<DbId>,
}
