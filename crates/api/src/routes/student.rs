//! Route definitions for the `/students` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{mark, student};
use crate::state::AppState;

/// Routes mounted at `/students`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list).post(student::create))
        .route("/{id}", get(student::get_by_id))
        .route("/{id}/devices", post(student::register_device))
        .route("/{id}/marks", get(mark::list_for_student))
}
