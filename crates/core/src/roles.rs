//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260715000001_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "administrador";
pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_TEACHER: &str = "profesor";
pub const ROLE_STUDENT: &str = "estudiante";
pub const ROLE_PARENT: &str = "padre";

/// Every role a staff account may carry, in display order.
pub const ALL_ROLES: [&str; 5] = [
    ROLE_ADMIN,
    ROLE_DIRECTOR,
    ROLE_TEACHER,
    ROLE_STUDENT,
    ROLE_PARENT,
];
