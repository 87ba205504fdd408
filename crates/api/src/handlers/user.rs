//! Handlers for the `/users` resource (staff accounts).

use aula_core::error::CoreError;
use aula_core::roles::ALL_ROLES;
use aula_core::types::DbId;
use aula_db::models::user::{CreateUser, RegisterDevice, User};
use aula_db::repositories::UserRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    if !ALL_ROLES.contains(&input.role.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown role: {}",
            input.role
        ))));
    }
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".to_string(),
        )));
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// POST /api/v1/users/{id}/devices
///
/// Register a device token against the account. The token is appended
/// as-is; duplicates are handled at read time by the recipient resolver.
pub async fn register_device(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RegisterDevice>,
) -> AppResult<StatusCode> {
    if input.token.trim().is_empty() {
        return Err(AppError::BadRequest("token must not be empty".to_string()));
    }

    let found = UserRepo::add_fcm_token(&state.pool, id, &input.token).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
