//! Shared domain vocabulary for the aula school portal backend.
//!
//! Kept dependency-light: id and timestamp aliases, role constants, the
//! push recipient descriptor, the domain error type, and the bimester
//! mark arithmetic. Everything else lives in the db/events/api crates.

pub mod error;
pub mod marks;
pub mod recipient;
pub mod roles;
pub mod types;
