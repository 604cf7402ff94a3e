use entity::sea_orm_active_enums::{PassStatus, PassType, UserRole};
use festival_test_utils::prelude::*;

use crate::model::pass::PurchasePassDto;

mod purchase_pass;

const STUDENT_DOMAIN: &str = "reva.edu.in";

fn purchase(pass_type: PassType, amount_paid: i64) -> PurchasePassDto {
    PurchasePassDto {
        pass_type,
        amount_paid,
        coupon_code: None,
        is_reva_student: false,
        srn: None,
        department: None,
    }
}
