//! Pass price table and credit redemption.

use entity::sea_orm_active_enums::PassType;

pub const STANDARD_PASS_PRICE: i64 = 1000;
pub const PREMIUM_PASS_PRICE: i64 = 2000;
pub const STUDENT_PASS_PRICE: i64 = 500;

/// Price of a pass before credits are applied.
pub fn base_price(pass_type: PassType) -> i64 {
    match pass_type {
        PassType::Standard => STANDARD_PASS_PRICE,
        PassType::Premium => PREMIUM_PASS_PRICE,
        PassType::Student => STUDENT_PASS_PRICE,
    }
}

/// Amount the buyer must pay after redeeming `credit`, never below zero.
pub fn expected_price(base: i64, credit: i64) -> i64 {
    (base - credit).max(0)
}

/// Portion of `credit` which actually reduced the price.
pub fn credit_applied(base: i64, credit: i64) -> i64 {
    credit.clamp(0, base)
}
