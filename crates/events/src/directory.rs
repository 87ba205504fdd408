//! The directory-store capability consumed by the recipient resolver.
//!
//! The resolver only ever needs four query shapes against the school
//! directory: full token scans, a point lookup, a reverse lookup through
//! the grade-assignment map, and a grade-set filter over students. They
//! are modelled as an injected trait so the resolver is testable against
//! an in-memory directory and agnostic of where accounts actually live.

use async_trait::async_trait;
use aula_core::types::DbId;
use aula_db::repositories::GradeAssignmentRepo;
use aula_db::DbPool;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for directory queries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database query failed.
    #[error("directory query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The directory backend is unreachable or misbehaving.
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// DirectoryStore
// ---------------------------------------------------------------------------

/// Read-only queries over accounts, students, and course assignments.
///
/// Token lists are returned exactly as stored (duplicates included);
/// deduplication is the resolver's job.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Every device token across all staff accounts (full scan).
    async fn all_staff_tokens(&self) -> Result<Vec<String>, StoreError>;

    /// Every device token across all students (full scan).
    async fn all_student_tokens(&self) -> Result<Vec<String>, StoreError>;

    /// Token list of a single account, looked up across staff accounts
    /// first and students second. An absent account yields an empty list.
    async fn account_tokens(&self, id: DbId) -> Result<Vec<String>, StoreError>;

    /// Every grade level whose assigned course set contains the course.
    async fn grades_assigned_to_course(&self, course_id: DbId) -> Result<Vec<String>, StoreError>;

    /// Every device token of students whose grade level is in the set.
    async fn student_tokens_in_grades(&self, grades: &[String])
        -> Result<Vec<String>, StoreError>;
}

// ---------------------------------------------------------------------------
// PgDirectory
// ---------------------------------------------------------------------------

/// The production [`DirectoryStore`] over the Postgres school directory.
///
/// Realizes the reference full-scan behavior with single SQL statements;
/// `unnest` flattens the per-account token arrays server-side.
pub struct PgDirectory {
    pool: DbPool,
}

impl PgDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryStore for PgDirectory {
    async fn all_staff_tokens(&self) -> Result<Vec<String>, StoreError> {
        let tokens = sqlx::query_scalar("SELECT unnest(fcm_tokens) FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(tokens)
    }

    async fn all_student_tokens(&self) -> Result<Vec<String>, StoreError> {
        let tokens = sqlx::query_scalar("SELECT unnest(fcm_tokens) FROM students")
            .fetch_all(&self.pool)
            .await?;
        Ok(tokens)
    }

    async fn account_tokens(&self, id: DbId) -> Result<Vec<String>, StoreError> {
        let staff: Option<Vec<String>> =
            sqlx::query_scalar("SELECT fcm_tokens FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        if let Some(tokens) = staff {
            return Ok(tokens);
        }

        let student: Option<Vec<String>> =
            sqlx::query_scalar("SELECT fcm_tokens FROM students WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(student.unwrap_or_default())
    }

    async fn grades_assigned_to_course(&self, course_id: DbId) -> Result<Vec<String>, StoreError> {
        let grades = GradeAssignmentRepo::grades_for_course(&self.pool, course_id).await?;
        Ok(grades)
    }

    async fn student_tokens_in_grades(
        &self,
        grades: &[String],
    ) -> Result<Vec<String>, StoreError> {
        let tokens =
            sqlx::query_scalar("SELECT unnest(fcm_tokens) FROM students WHERE grade_level = ANY($1)")
                .bind(grades)
                .fetch_all(&self.pool)
                .await?;
        Ok(tokens)
    }
}
