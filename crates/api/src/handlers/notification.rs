//! Handlers for the `/notifications` resource.
//!
//! Creating a notification inserts the row and publishes a
//! record-created event; the push fan-out does the rest asynchronously.
//! The HTTP response only reflects the insert -- push delivery failures
//! are observable in the logs, never here.

use aula_core::error::CoreError;
use aula_core::types::DbId;
use aula_db::models::notification::{CreateNotification, Notification};
use aula_db::repositories::NotificationRepo;
use aula_events::StoreEvent;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

/// POST /api/v1/notifications
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".to_string(),
        )));
    }

    let notification = NotificationRepo::create(&state.pool, &input).await?;
    state
        .event_bus
        .publish(StoreEvent::NotificationCreated(notification.clone()));

    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /api/v1/notifications
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let notifications = NotificationRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(notifications))
}

/// GET /api/v1/notifications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Notification>> {
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;
    Ok(Json(notification))
}
