//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state and session, verifying status codes, response
//! bodies and capability checks for every API endpoint.

mod admin;
mod auth;
mod coupon;
mod event;
mod pass;
mod registration;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{PassStatus, PassType, UserRole};
use festival::server::{controller::util::json::ApiJson, model::app::AppState};
use festival_test_utils::prelude::*;

use crate::util::{json_body, login};
