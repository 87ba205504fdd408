//! Route definitions, one submodule per resource.

pub mod course;
pub mod event;
pub mod grade_level;
pub mod health;
pub mod mark;
pub mod notification;
pub mod student;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                               list, create
/// /users/{id}                          get
/// /users/{id}/devices                  register device token (POST)
///
/// /students                            list, create
/// /students/{id}                       get
/// /students/{id}/devices               register device token (POST)
/// /students/{id}/marks                 report card for one student
///
/// /courses                             list, create
/// /courses/{id}                        get
///
/// /grade-levels                        list assignments
/// /grade-levels/{grade_level}/courses  replace assignment (PUT)
///
/// /notifications                       list, create (create triggers push)
/// /notifications/{id}                  get
///
/// /events                              list, create (create triggers push)
/// /events/{id}                         get
///
/// /marks                               upsert (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/students", student::router())
        .nest("/courses", course::router())
        .nest("/grade-levels", grade_level::router())
        .nest("/notifications", notification::router())
        .nest("/events", event::router())
        .nest("/marks", mark::router())
}
