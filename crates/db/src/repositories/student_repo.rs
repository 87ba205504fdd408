//! Repository for the `students` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

const COLUMNS: &str =
    "id, name, grade_level, parent_name, enrollment_year, is_active, fcm_tokens, created_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, grade_level, parent_name, enrollment_year)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.grade_level)
            .bind(&input.parent_name)
            .bind(input.enrollment_year)
            .fetch_one(pool)
            .await
    }

    /// Find a student by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY name");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Append a device token to a student's token array (no duplicate
    /// check, same contract as [`UserRepo::add_fcm_token`]).
    ///
    /// Returns `false` if no student with the given `id` exists.
    ///
    /// [`UserRepo::add_fcm_token`]: crate::repositories::UserRepo::add_fcm_token
    pub async fn add_fcm_token(pool: &PgPool, id: DbId, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET fcm_tokens = array_append(fcm_tokens, $2) WHERE id = $1",
        )
        .bind(id)
        .bind(token)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
