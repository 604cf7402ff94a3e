//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod coupon;
pub mod credit;
pub mod event;
pub mod finance;
pub mod pass;
pub mod registration;
pub mod user;
