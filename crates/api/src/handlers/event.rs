//! Handlers for the `/events` (school calendar) resource.

use aula_core::error::CoreError;
use aula_core::types::DbId;
use aula_db::models::event::{CalendarEvent, CreateEvent, EVENT_CATEGORIES};
use aula_db::repositories::EventRepo;
use aula_events::StoreEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/events
///
/// The date is optional: a dateless draft is stored but never pushed.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<CalendarEvent>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    if !EVENT_CATEGORIES.contains(&input.category.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown category: {}",
            input.category
        ))));
    }

    let event = EventRepo::create(&state.pool, &input).await?;
    state
        .event_bus
        .publish(StoreEvent::EventCreated(event.clone()));

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CalendarEvent>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}
