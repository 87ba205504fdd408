//! Route definitions for the `/marks` resource.
//!
//! Per-student listing lives under `/students/{id}/marks`.

use axum::routing::post;
use axum::Router;

use crate::handlers::mark;
use crate::state::AppState;

/// Routes mounted at `/marks`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(mark::upsert))
}
