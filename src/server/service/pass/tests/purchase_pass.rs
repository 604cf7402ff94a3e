use sea_orm::EntityTrait;

use crate::server::{
    data::credit::CreditRepository,
    error::{pass::PassError, Error},
    service::pass::PassService,
};

use super::*;

/// Expect 300 credit to bring a standard pass down to 700 and be consumed entirely
#[tokio::test]
async fn redeems_credit_against_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;
    test.credit().insert_credit(user.id, 200, false).await?;
    test.credit().insert_credit(user.id, 100, false).await?;

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let pass = pass_service
        .purchase_pass(&user, purchase(PassType::Standard, 700))
        .await?;

    assert_eq!(pass.status, PassStatus::Active);
    assert_eq!(pass.amount_paid, 700);
    assert_eq!(pass.credit_applied, 300);
    assert!(pass.display_id.starts_with("FEST-"));

    let remaining = CreditRepository::new(&test.db)
        .get_unused_by_user_id(user.id)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Expect paying less than the credit adjusted price to fail and leave credits untouched
#[tokio::test]
async fn rejects_underpayment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;
    test.credit().insert_credit(user.id, 300, false).await?;

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let result = pass_service
        .purchase_pass(&user, purchase(PassType::Standard, 600))
        .await;

    assert!(matches!(
        result,
        Err(Error::PassError(PassError::Underpaid {
            expected: 700,
            paid: 600
        }))
    ));
    let remaining = CreditRepository::new(&test.db)
        .get_unused_by_user_id(user.id)
        .await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

/// Expect credits exceeding the price to allow a free pass and all be consumed
#[tokio::test]
async fn consumes_excess_credit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;
    test.credit().insert_credit(user.id, 750, false).await?;

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let pass = pass_service
        .purchase_pass(&user, purchase(PassType::Student, 0))
        .await?;

    assert_eq!(pass.credit_applied, 500);
    assert!(CreditRepository::new(&test.db)
        .get_unused_by_user_id(user.id)
        .await?
        .is_empty());

    Ok(())
}

/// Expect a negative amount to be rejected outright
#[tokio::test]
async fn rejects_negative_amount() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let result = pass_service
        .purchase_pass(&user, purchase(PassType::Standard, -5))
        .await;

    assert!(matches!(
        result,
        Err(Error::PassError(PassError::NegativeAmount(-5)))
    ));

    Ok(())
}

/// Expect a student purchase to await verification with its details recorded
#[tokio::test]
async fn student_pass_awaits_verification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("asha@reva.edu.in", UserRole::User).await?;

    let mut dto = purchase(PassType::Student, 500);
    dto.is_reva_student = true;
    dto.srn = Some("R21CS001".to_string());
    dto.department = Some(" CSE ".to_string());

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let pass = pass_service.purchase_pass(&user, dto).await?;

    assert_eq!(pass.status, PassStatus::PendingVerification);
    assert_eq!(pass.srn.as_deref(), Some("R21CS001"));
    assert_eq!(pass.department.as_deref(), Some("CSE"));

    Ok(())
}

/// Expect a student purchase from an outside email domain to be rejected
#[tokio::test]
async fn student_requires_institution_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("asha@gmail.com", UserRole::User).await?;

    let mut dto = purchase(PassType::Student, 500);
    dto.is_reva_student = true;
    dto.srn = Some("R21CS001".to_string());
    dto.department = Some("CSE".to_string());

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let result = pass_service.purchase_pass(&user, dto).await;

    assert!(matches!(
        result,
        Err(Error::PassError(PassError::StudentEmailRequired(_)))
    ));

    Ok(())
}

/// Expect a student purchase without SRN or with a blank department to be rejected
#[tokio::test]
async fn student_requires_details() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("asha@reva.edu.in", UserRole::User).await?;
    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);

    let mut missing_srn = purchase(PassType::Student, 500);
    missing_srn.is_reva_student = true;
    missing_srn.department = Some("CSE".to_string());
    let result = pass_service.purchase_pass(&user, missing_srn).await;
    assert!(matches!(
        result,
        Err(Error::PassError(PassError::MissingStudentDetails))
    ));

    let mut blank_department = purchase(PassType::Student, 500);
    blank_department.is_reva_student = true;
    blank_department.srn = Some("R21CS001".to_string());
    blank_department.department = Some("   ".to_string());
    let result = pass_service.purchase_pass(&user, blank_department).await;
    assert!(matches!(
        result,
        Err(Error::PassError(PassError::MissingStudentDetails))
    ));

    Ok(())
}

/// Expect the coupon to be matched case-insensitively and recorded on the pass
#[tokio::test]
async fn records_coupon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let volunteer = test
        .user()
        .insert_user("vol@example.com", UserRole::Volunteer)
        .await?;
    let coupon = test.coupon().insert_coupon("MEERA10", volunteer.id).await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;

    let mut dto = purchase(PassType::Premium, 2000);
    dto.coupon_code = Some("meera10".to_string());

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let pass = pass_service.purchase_pass(&user, dto).await?;

    let stored = entity::prelude::FestivalPass::find_by_id(pass.id)
        .one(&test.db)
        .await?;
    assert!(matches!(stored, Some(p) if p.coupon_id == Some(coupon.id)));

    Ok(())
}

/// Expect an unknown coupon code to be rejected
#[tokio::test]
async fn rejects_unknown_coupon() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;

    let mut dto = purchase(PassType::Standard, 1000);
    dto.coupon_code = Some("NOPE".to_string());

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let result = pass_service.purchase_pass(&user, dto).await;

    assert!(matches!(
        result,
        Err(Error::PassError(PassError::UnknownCoupon(code))) if code == "NOPE"
    ));

    Ok(())
}

/// Expect an existing active pass to block another purchase
#[tokio::test]
async fn rejects_second_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;
    test.pass()
        .insert_pass(user.id, PassType::Standard, PassStatus::Active)
        .await?;

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let result = pass_service
        .purchase_pass(&user, purchase(PassType::Premium, 2000))
        .await;

    assert!(matches!(
        result,
        Err(Error::PassError(PassError::AlreadyHoldsPass(_)))
    ));

    Ok(())
}

/// Expect a rejected pass to not prevent buying a new one
#[tokio::test]
async fn allows_purchase_after_rejection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_festival_tables().build().await?;
    let user = test.user().insert_user("a@example.com", UserRole::User).await?;
    test.pass()
        .insert_pass(user.id, PassType::Student, PassStatus::Rejected)
        .await?;

    let pass_service = PassService::new(&test.db, STUDENT_DOMAIN);
    let result = pass_service
        .purchase_pass(&user, purchase(PassType::Standard, 1000))
        .await;

    assert!(matches!(result, Ok(pass) if pass.status == PassStatus::Active));

    Ok(())
}
