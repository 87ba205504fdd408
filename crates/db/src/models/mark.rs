//! Report-card (marks) models and DTOs.

use aula_core::marks::BimesterMarks;
use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `marks` table: one student's marks for one course in
/// one school year.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mark {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub year: i32,
    pub bimestre1: Option<Json<BimesterMarks>>,
    pub bimestre2: Option<Json<BimesterMarks>>,
    pub bimestre3: Option<Json<BimesterMarks>>,
    pub bimestre4: Option<Json<BimesterMarks>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Mark {
    /// The four bimester blocks in order, for average computation.
    pub fn bimesters(&self) -> [Option<BimesterMarks>; 4] {
        [
            self.bimestre1.as_ref().map(|j| j.0),
            self.bimestre2.as_ref().map(|j| j.0),
            self.bimestre3.as_ref().map(|j| j.0),
            self.bimestre4.as_ref().map(|j| j.0),
        ]
    }
}

/// DTO for creating or replacing a mark row.
#[derive(Debug, Deserialize)]
pub struct UpsertMark {
    pub student_id: DbId,
    pub course_id: DbId,
    pub year: i32,
    pub bimestre1: Option<BimesterMarks>,
    pub bimestre2: Option<BimesterMarks>,
    pub bimestre3: Option<BimesterMarks>,
    pub bimestre4: Option<BimesterMarks>,
}
