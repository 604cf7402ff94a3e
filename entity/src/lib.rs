//! SeaORM entities for the festival schema.

pub mod prelude;

pub mod festival_coupon;
pub mod festival_credit;
pub mod festival_event;
pub mod festival_pass;
pub mod festival_registration;
pub mod festival_team;
pub mod festival_team_member;
pub mod festival_user;
pub mod sea_orm_active_enums;
