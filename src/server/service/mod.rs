//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic and coordinates
//! between repositories. Multi-write operations run inside a single transaction wrapped in
//! [`retry::RetryContext`] so transient connection failures start over on a fresh transaction.

pub mod auth;
pub mod coupon;
pub mod credit;
pub mod event;
pub mod finance;
pub mod pass;
pub mod registration;
pub mod retry;
pub mod user;
