//! Pass purchase, verification and check-in.

pub mod pricing;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::PassStatus;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::pass::{PassDto, PurchasePassDto},
    server::{
        data::{
            coupon::CouponRepository,
            credit::CreditRepository,
            pass::{CreatePassParams, PassRepository},
        },
        error::{pass::PassError, Error},
        model::db::{PassModel, UserModel},
        service::retry::RetryContext,
        util::code::generate_pass_display_id,
    },
};

/// Student details required for a student verification pass.
#[derive(Clone)]
struct StudentDetails {
    srn: String,
    department: String,
}

pub struct PassService<'a> {
    db: &'a DatabaseConnection,
    student_email_domain: &'a str,
}

impl<'a> PassService<'a> {
    /// Creates a new instance of [`PassService`]
    ///
    /// `student_email_domain` is the domain student buyers must have an email address on,
    /// without a leading `@`.
    pub fn new(db: &'a DatabaseConnection, student_email_domain: &'a str) -> Self {
        Self {
            db,
            student_email_domain,
        }
    }

    /// Purchases a pass for `user`, redeeming their entire unused credit balance
    ///
    /// # Returns
    /// - `Ok(PassDto)` - The created pass, `pending_verification` for students
    /// - `Err(Error::PassError)` - Underpayment, missing student details, unknown coupon, an
    ///   existing pass or a credit balance which changed during the purchase
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn purchase_pass(
        &self,
        user: &UserModel,
        purchase: PurchasePassDto,
    ) -> Result<PassDto, Error> {
        if purchase.amount_paid < 0 {
            return Err(PassError::NegativeAmount(purchase.amount_paid).into());
        }

        let student = if purchase.is_reva_student {
            Some(self.validate_student(user, &purchase)?)
        } else {
            None
        };

        let coupon_code = purchase
            .coupon_code
            .as_deref()
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty());

        let ctx = RetryContext::new();
        let db = self.db.clone();
        let user_id = user.id;

        let pass = ctx
            .execute_with_retry(&format!("pass purchase for user ID {}", user_id), || {
                let db = db.clone();
                let purchase = purchase.clone();
                let student = student.clone();
                let coupon_code = coupon_code.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let pass =
                        purchase_pass_in_txn(&txn, user_id, purchase, student, coupon_code).await?;
                    txn.commit().await?;

                    Ok(pass)
                })
            })
            .await?;

        tracing::info!(
            user_id = %pass.user_id,
            pass_id = %pass.id,
            amount_paid = %pass.amount_paid,
            credit_applied = %pass.credit_applied,
            "Purchased pass {}",
            pass.display_id
        );

        Ok(pass.into())
    }

    /// Returns the most recent pass of a user
    pub async fn get_my_pass(&self, user_id: i32) -> Result<PassDto, Error> {
        let pass = PassRepository::new(self.db)
            .get_latest_by_user_id(user_id)
            .await?
            .ok_or(PassError::NoPass(user_id))?;

        Ok(pass.into())
    }

    /// Lists passes awaiting student verification, oldest first
    pub async fn list_pending(&self) -> Result<Vec<PassDto>, Error> {
        let passes = PassRepository::new(self.db)
            .get_many_by_status(PassStatus::PendingVerification)
            .await?;

        Ok(passes.into_iter().map(PassDto::from).collect())
    }

    /// Approves or rejects a pass awaiting verification
    pub async fn verify_pass(&self, pass_id: i32, approve: bool) -> Result<PassDto, Error> {
        let pass_repo = PassRepository::new(self.db);

        pass_repo
            .get(pass_id)
            .await?
            .ok_or(PassError::NotFound(pass_id))?;

        let status = if approve {
            PassStatus::Active
        } else {
            PassStatus::Rejected
        };

        let updated = pass_repo
            .update_status(pass_id, PassStatus::PendingVerification, status)
            .await?;
        if updated == 0 {
            return Err(PassError::NotPendingVerification(pass_id).into());
        }

        let pass = fetch_pass(&pass_repo, pass_id).await?;

        tracing::info!(pass_id = %pass.id, approved = %approve, "Verified pass {}", pass.display_id);

        Ok(pass.into())
    }

    /// Checks in an active pass at the gate
    pub async fn check_in(&self, display_id: &str) -> Result<PassDto, Error> {
        let display_id = display_id.trim().to_uppercase();
        let pass_repo = PassRepository::new(self.db);

        let pass = pass_repo
            .get_by_display_id(&display_id)
            .await?
            .ok_or_else(|| PassError::DisplayIdNotFound(display_id.clone()))?;

        if pass.status != PassStatus::Active {
            return Err(PassError::NotActive(display_id).into());
        }

        if pass_repo.mark_checked_in(pass.id).await? == 0 {
            return Err(PassError::AlreadyCheckedIn(display_id).into());
        }

        let pass = fetch_pass(&pass_repo, pass.id).await?;

        tracing::info!(pass_id = %pass.id, "Checked in pass {}", pass.display_id);

        Ok(pass.into())
    }

    fn validate_student(
        &self,
        user: &UserModel,
        purchase: &PurchasePassDto,
    ) -> Result<StudentDetails, PassError> {
        let suffix = format!("@{}", self.student_email_domain.to_lowercase());
        if !user.email.to_lowercase().ends_with(&suffix) {
            return Err(PassError::StudentEmailRequired(
                self.student_email_domain.to_string(),
            ));
        }

        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        match (non_blank(&purchase.srn), non_blank(&purchase.department)) {
            (Some(srn), Some(department)) => Ok(StudentDetails { srn, department }),
            _ => Err(PassError::MissingStudentDetails),
        }
    }
}

async fn fetch_pass(
    pass_repo: &PassRepository<'_, DatabaseConnection>,
    pass_id: i32,
) -> Result<PassModel, Error> {
    pass_repo.get(pass_id).await?.ok_or_else(|| {
        Error::InternalError(format!("Pass ID {} disappeared after update", pass_id))
    })
}

async fn purchase_pass_in_txn(
    txn: &DatabaseTransaction,
    user_id: i32,
    purchase: PurchasePassDto,
    student: Option<StudentDetails>,
    coupon_code: Option<String>,
) -> Result<PassModel, Error> {
    let pass_repo = PassRepository::new(txn);

    if let Some(existing) = pass_repo.find_blocking_by_user_id(user_id).await? {
        tracing::debug!(pass_id = %existing.id, "User ID {} already holds a pass", user_id);

        return Err(PassError::AlreadyHoldsPass(user_id).into());
    }

    let coupon_id = match coupon_code {
        Some(code) => Some(
            CouponRepository::new(txn)
                .get_by_code(&code)
                .await?
                .ok_or(PassError::UnknownCoupon(code))?
                .id,
        ),
        None => None,
    };

    let credit_repo = CreditRepository::new(txn);
    let credits = credit_repo.get_unused_by_user_id(user_id).await?;
    let credit: i64 = credits.iter().map(|c| c.amount).sum();

    let base = pricing::base_price(purchase.pass_type);
    let expected = pricing::expected_price(base, credit);
    if purchase.amount_paid < expected {
        return Err(PassError::Underpaid {
            expected,
            paid: purchase.amount_paid,
        }
        .into());
    }

    let credit_ids: Vec<i32> = credits.iter().map(|c| c.id).collect();
    let consumed = credit_repo.mark_used(&credit_ids).await?;
    if consumed != credit_ids.len() as u64 {
        return Err(PassError::CreditBalanceChanged(user_id).into());
    }

    let (status, srn, department) = match student {
        Some(details) => (
            PassStatus::PendingVerification,
            Some(details.srn),
            Some(details.department),
        ),
        None => (PassStatus::Active, None, None),
    };

    let pass = pass_repo
        .create(CreatePassParams {
            user_id,
            display_id: generate_pass_display_id(),
            pass_type: purchase.pass_type,
            status,
            amount_paid: purchase.amount_paid,
            credit_applied: pricing::credit_applied(base, credit),
            coupon_id,
            srn,
            department,
        })
        .await?;

    Ok(pass)
}
