//! Handlers for the `/grade-levels` resource: the grade-to-course
//! assignment map the course recipient resolution reverses through.

use aula_db::models::course::{GradeAssignment, UpdateGradeAssignment};
use aula_db::repositories::GradeAssignmentRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/grade-levels
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GradeAssignment>>> {
    let assignments = GradeAssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// PUT /api/v1/grade-levels/{grade_level}/courses
///
/// Replace the set of courses taught in a grade level, creating the
/// assignment row on first write.
pub async fn set_courses(
    State(state): State<AppState>,
    Path(grade_level): Path<String>,
    Json(input): Json<UpdateGradeAssignment>,
) -> AppResult<Json<GradeAssignment>> {
    if grade_level.trim().is_empty() {
        return Err(AppError::BadRequest(
            "grade level must not be empty".to_string(),
        ));
    }

    let assignment =
        GradeAssignmentRepo::upsert(&state.pool, &grade_level, &input.course_ids).await?;
    Ok(Json(assignment))
}
