//! Session data models.
//!
//! Type-safe wrappers for session data stored with tower-sessions. Sessions are established by
//! the external auth provider on the shared Valkey store; this service reads them and clears
//! them on logout.

pub mod user;
