//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the logged in
//! account from the session, checking it may perform an action and extracting JSON bodies.

pub mod capability;
pub mod get_user;
pub mod json;
