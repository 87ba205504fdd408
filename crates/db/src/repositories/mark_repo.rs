//! Repository for the `marks` (report card) table.

use aula_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::mark::{Mark, UpsertMark};

const COLUMNS: &str = "id, student_id, course_id, year, \
                       bimestre1, bimestre2, bimestre3, bimestre4, \
                       created_at, updated_at";

/// Provides CRUD operations for report-card records.
pub struct MarkRepo;

impl MarkRepo {
    /// Create or replace the mark row for (student, course, year).
    pub async fn upsert(pool: &PgPool, input: &UpsertMark) -> Result<Mark, sqlx::Error> {
        let query = format!(
            "INSERT INTO marks (student_id, course_id, year, bimestre1, bimestre2, bimestre3, bimestre4)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (student_id, course_id, year)
             DO UPDATE SET
                bimestre1 = EXCLUDED.bimestre1,
                bimestre2 = EXCLUDED.bimestre2,
                bimestre3 = EXCLUDED.bimestre3,
                bimestre4 = EXCLUDED.bimestre4,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mark>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(input.year)
            .bind(input.bimestre1.map(Json))
            .bind(input.bimestre2.map(Json))
            .bind(input.bimestre3.map(Json))
            .bind(input.bimestre4.map(Json))
            .fetch_one(pool)
            .await
    }

    /// List a student's mark rows, optionally restricted to one year.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
        year: Option<i32>,
    ) -> Result<Vec<Mark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marks
             WHERE student_id = $1 AND ($2::integer IS NULL OR year = $2)
             ORDER BY year DESC, course_id"
        );
        sqlx::query_as::<_, Mark>(&query)
            .bind(student_id)
            .bind(year)
            .fetch_all(pool)
            .await
    }
}
