//! Handlers for the `/courses` resource.

use aula_core::error::CoreError;
use aula_core::types::DbId;
use aula_db::models::course::{Course, CreateCourse};
use aula_db::repositories::CourseRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".to_string(),
        )));
    }

    let course = CourseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}
