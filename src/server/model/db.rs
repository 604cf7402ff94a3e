//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to spell out the generated
//! `entity` crate paths.

/// Festival account, created by the external auth provider at signup.
///
/// # Fields (from `entity::festival_user::Model`)
/// - `id` - Primary key
/// - `email` - Unique, stored lower-case
/// - `role` - `user`, `volunteer` or `admin`
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::festival_user::Model;

/// Competitive event teams register for.
pub type EventModel = entity::festival_event::Model;

/// Festival entry pass owned by a single account.
///
/// Only passes with status `active` count as a valid entry credential; student passes start
/// as `pending_verification` until an admin approves them.
pub type PassModel = entity::festival_pass::Model;

/// Team created by a single registration submission.
pub type TeamModel = entity::festival_team::Model;

/// Roster entry of a team, linked to an account when the email matched one.
pub type TeamMemberModel = entity::festival_team_member::Model;

/// Registration of an account for an event.
pub type RegistrationModel = entity::festival_registration::Model;

/// Redeemable credit granted to a member whose share of a team fee was covered.
pub type CreditModel = entity::festival_credit::Model;

/// Volunteer-attributed pass sales code.
pub type CouponModel = entity::festival_coupon::Model;
