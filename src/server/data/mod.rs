//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same methods run on a
//! plain connection or inside a transaction.

pub mod coupon;
pub mod credit;
pub mod event;
pub mod pass;
pub mod registration;
pub mod team;
pub mod team_member;
pub mod user;
