//! Repository for the `grade_course_assignments` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::GradeAssignment;

const COLUMNS: &str = "grade_level, course_ids, updated_at";

/// Provides access to the grade-level to course assignment map.
pub struct GradeAssignmentRepo;

impl GradeAssignmentRepo {
    /// Replace the course set assigned to a grade level, creating the row
    /// if the grade level has no assignment yet.
    pub async fn upsert(
        pool: &PgPool,
        grade_level: &str,
        course_ids: &[DbId],
    ) -> Result<GradeAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO grade_course_assignments (grade_level, course_ids)
             VALUES ($1, $2)
             ON CONFLICT (grade_level)
             DO UPDATE SET course_ids = EXCLUDED.course_ids, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GradeAssignment>(&query)
            .bind(grade_level)
            .bind(course_ids)
            .fetch_one(pool)
            .await
    }

    /// Find one grade level's assignment.
    pub async fn find_by_grade(
        pool: &PgPool,
        grade_level: &str,
    ) -> Result<Option<GradeAssignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grade_course_assignments WHERE grade_level = $1");
        sqlx::query_as::<_, GradeAssignment>(&query)
            .bind(grade_level)
            .fetch_optional(pool)
            .await
    }

    /// List every assignment row ordered by grade level.
    pub async fn list(pool: &PgPool) -> Result<Vec<GradeAssignment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM grade_course_assignments ORDER BY grade_level");
        sqlx::query_as::<_, GradeAssignment>(&query)
            .fetch_all(pool)
            .await
    }

    /// Reverse lookup: every grade level whose assignment contains the
    /// given course.
    pub async fn grades_for_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT grade_level FROM grade_course_assignments WHERE $1 = ANY(course_ids)",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await
    }
}
