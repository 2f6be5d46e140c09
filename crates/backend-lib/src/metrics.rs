// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const USERS_CREATED: &str = "users.created";
pub const USERS_UPDATED: &str = "users.updated";
pub const USERS_DELETED: &str = "users.deleted";
pub const USERS_EDIT_CONFLICT: &str = "users.edit_conflict";
pub const LOGIN_SUCCESS: &str = "auth.login.success";
pub const LOGIN_FAILURE: &str = "auth.login.failure";
pub const GATE_REJECTED: &str = "auth.gate.rejected";
