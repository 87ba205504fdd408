//! Handlers for the `/students` resource.

use aula_core::error::CoreError;
use aula_core::types::DbId;
use aula_db::models::student::{CreateStudent, Student};
use aula_db::models::user::RegisterDevice;
use aula_db::repositories::StudentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".to_string(),
        )));
    }
    if input.grade_level.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "grade_level must not be empty".to_string(),
        )));
    }

    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}

/// POST /api/v1/students/{id}/devices
///
/// Same append-only contract as the staff variant.
pub async fn register_device(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RegisterDevice>,
) -> AppResult<StatusCode> {
    if input.token.trim().is_empty() {
        return Err(AppError::BadRequest("token must not be empty".to_string()));
    }

    let found = StudentRepo::add_fcm_token(&state.pool, id, &input.token).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
