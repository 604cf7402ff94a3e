//! Authorization service layer.
//!
//! Sessions are established by the external auth provider, this service only decides what the
//! account behind a session is allowed to do.

pub mod capability;
