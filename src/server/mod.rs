//! Server application core modules.
//!
//! This module contains all server-side functionality for the festival back end, including
//! HTTP routing, session-based identity, database operations and the registration, pass,
//! credit and coupon business logic.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
