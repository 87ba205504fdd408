//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the corresponding repository in `aula_db` and map
//! errors via [`AppError`](crate::error::AppError). The notification and
//! event handlers additionally publish a record-created event on the bus
//! so the push fan-out picks the new row up.

pub mod course;
pub mod event;
pub mod grade_level;
pub mod mark;
pub mod notification;
pub mod student;
pub mod user;
