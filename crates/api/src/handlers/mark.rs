//! Handlers for report-card marks.

use aula_core::error::CoreError;
use aula_core::marks::year_average;
use aula_core::types::DbId;
use aula_db::models::mark::{Mark, UpsertMark};
use aula_db::repositories::{MarkRepo, StudentRepo};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A mark row plus its computed yearly average.
#[derive(Debug, Serialize)]
pub struct MarkWithAverage {
    #[serde(flatten)]
    pub mark: Mark,
    /// Rounded mean over the graded bimesters.
    pub average: i64,
}

impl From<Mark> for MarkWithAverage {
    fn from(mark: Mark) -> Self {
        let average = year_average(&mark.bimesters());
        Self { mark, average }
    }
}

/// Query parameters for `GET /students/{id}/marks`.
#[derive(Debug, Deserialize)]
pub struct MarkQuery {
    /// Restrict to one school year.
    pub year: Option<i32>,
}

/// POST /api/v1/marks
///
/// Creates or replaces the mark row for (student, course, year).
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertMark>,
) -> AppResult<Json<MarkWithAverage>> {
    let mark = MarkRepo::upsert(&state.pool, &input).await?;
    Ok(Json(mark.into()))
}

/// GET /api/v1/students/{id}/marks
pub async fn list_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Query(params): Query<MarkQuery>,
) -> AppResult<Json<Vec<MarkWithAverage>>> {
    StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;

    let marks = MarkRepo::list_for_student(&state.pool, student_id, params.year).await?;
    Ok(Json(marks.into_iter().map(MarkWithAverage::from).collect()))
}
