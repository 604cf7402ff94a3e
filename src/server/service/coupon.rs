use std::collections::HashMap;

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::coupon::{CouponDto, CreateCouponDto, LeaderboardEntryDto},
    server::{
        data::{coupon::CouponRepository, pass::PassRepository, user::UserRepository},
        error::{coupon::CouponError, Error},
    },
};

pub struct CouponService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponService<'a> {
    /// Creates a new instance of [`CouponService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a coupon attributed to a volunteer
    ///
    /// Codes are stored upper-case so lookups during pass purchase are case-insensitive.
    ///
    /// # Returns
    /// - `Ok(CouponDto)` - The created coupon
    /// - `Err(Error::CouponError)` - Blank code, unknown or non-volunteer account, duplicate code
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_coupon(&self, coupon: CreateCouponDto) -> Result<CouponDto, Error> {
        let code = coupon.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CouponError::EmptyCode.into());
        }

        let volunteer = UserRepository::new(self.db)
            .get(coupon.volunteer_id)
            .await?
            .ok_or(CouponError::VolunteerNotFound(coupon.volunteer_id))?;

        if volunteer.role == UserRole::User {
            return Err(CouponError::NotAVolunteer(volunteer.id).into());
        }

        let coupon_repo = CouponRepository::new(self.db);
        if coupon_repo.get_by_code(&code).await?.is_some() {
            return Err(CouponError::DuplicateCode(code).into());
        }

        let coupon = coupon_repo.create(code, volunteer.id).await?;

        tracing::info!(
            coupon_id = %coupon.id,
            volunteer_id = %coupon.volunteer_id,
            "Created coupon {}",
            coupon.code
        );

        Ok(CouponDto {
            id: coupon.id,
            code: coupon.code,
            volunteer_id: coupon.volunteer_id,
        })
    }

    /// Ranks coupons by passes sold, then revenue, then code
    ///
    /// Rejected passes are not counted as sales. Coupons without any sale are listed with zeros.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntryDto>, Error> {
        let coupons = CouponRepository::new(self.db)
            .get_all_with_volunteer()
            .await?;
        let sales: HashMap<i32, (u64, i64)> = PassRepository::new(self.db)
            .sales_by_coupon()
            .await?
            .into_iter()
            .map(|(coupon_id, passes, revenue)| (coupon_id, (passes.max(0) as u64, revenue)))
            .collect();

        let mut leaderboard: Vec<LeaderboardEntryDto> = coupons
            .into_iter()
            .map(|(coupon, volunteer)| {
                let (passes_sold, revenue) = sales.get(&coupon.id).copied().unwrap_or_default();

                LeaderboardEntryDto {
                    code: coupon.code,
                    volunteer_id: coupon.volunteer_id,
                    volunteer_email: volunteer.map(|v| v.email).unwrap_or_default(),
                    passes_sold,
                    revenue,
                }
            })
            .collect();

        leaderboard.sort_by(|a, b| {
            b.passes_sold
                .cmp(&a.passes_sold)
                .then(b.revenue.cmp(&a.revenue))
                .then_with(|| a.code.cmp(&b.code))
        });

        Ok(leaderboard)
    }
}
