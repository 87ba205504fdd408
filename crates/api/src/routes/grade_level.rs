//! Route definitions for the `/grade-levels` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::grade_level;
use crate::state::AppState;

/// Routes mounted at `/grade-levels`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(grade_level::list))
        .route("/{grade_level}/courses", put(grade_level::set_courses))
}
