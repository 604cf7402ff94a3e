//! HTTP controller endpoints for the festival web API.
//!
//! This module contains Axum handlers for registration, passes, credits, events and the
//! admin/volunteer back office. Controllers resolve the caller from the session, check their
//! capability, call into services and return JSON responses. They use utoipa for OpenAPI
//! documentation.

pub mod admin;
pub mod auth;
pub mod coupon;
pub mod event;
pub mod pass;
pub mod registration;
pub mod user;
pub mod util;
