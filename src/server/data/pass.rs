use std::collections::HashSet;

use chrono::Utc;
use entity::sea_orm_active_enums::{PassStatus, PassType};
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::PassModel;

/// Values required to insert a new pass row.
pub struct CreatePassParams {
    pub user_id: i32,
    pub display_id: String,
    pub pass_type: PassType,
    pub status: PassStatus,
    pub amount_paid: i64,
    pub credit_applied: i64,
    pub coupon_id: Option<i32>,
    pub srn: Option<String>,
    pub department: Option<String>,
}

pub struct PassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassRepository<'a, C> {
    /// Creates a new instance of [`PassRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePassParams) -> Result<PassModel, DbErr> {
        let pass = entity::festival_pass::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            display_id: ActiveValue::Set(params.display_id),
            pass_type: ActiveValue::Set(params.pass_type),
            status: ActiveValue::Set(params.status),
            amount_paid: ActiveValue::Set(params.amount_paid),
            credit_applied: ActiveValue::Set(params.credit_applied),
            coupon_id: ActiveValue::Set(params.coupon_id),
            srn: ActiveValue::Set(params.srn),
            department: ActiveValue::Set(params.department),
            checked_in_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pass.insert(self.db).await
    }

    pub async fn get(&self, pass_id: i32) -> Result<Option<PassModel>, DbErr> {
        entity::prelude::FestivalPass::find_by_id(pass_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_display_id(&self, display_id: &str) -> Result<Option<PassModel>, DbErr> {
        entity::prelude::FestivalPass::find()
            .filter(entity::festival_pass::Column::DisplayId.eq(display_id))
            .one(self.db)
            .await
    }

    /// Gets the most recently created pass of a user regardless of status
    pub async fn get_latest_by_user_id(&self, user_id: i32) -> Result<Option<PassModel>, DbErr> {
        entity::prelude::FestivalPass::find()
            .filter(entity::festival_pass::Column::UserId.eq(user_id))
            .order_by_desc(entity::festival_pass::Column::CreatedAt)
            .order_by_desc(entity::festival_pass::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets a pass which prevents the user from buying another one
    ///
    /// Active passes and passes still awaiting verification both block a purchase, rejected
    /// passes do not.
    pub async fn find_blocking_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<PassModel>, DbErr> {
        entity::prelude::FestivalPass::find()
            .filter(entity::festival_pass::Column::UserId.eq(user_id))
            .filter(
                entity::festival_pass::Column::Status
                    .is_in([PassStatus::Active, PassStatus::PendingVerification]),
            )
            .one(self.db)
            .await
    }

    /// Returns the subset of `user_ids` which currently hold an active pass
    pub async fn user_ids_with_active_pass(
        &self,
        user_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let holders: Vec<i32> = entity::prelude::FestivalPass::find()
            .select_only()
            .column(entity::festival_pass::Column::UserId)
            .filter(entity::festival_pass::Column::UserId.is_in(user_ids.iter().copied()))
            .filter(entity::festival_pass::Column::Status.eq(PassStatus::Active))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(holders.into_iter().collect())
    }

    pub async fn get_many_by_status(&self, status: PassStatus) -> Result<Vec<PassModel>, DbErr> {
        entity::prelude::FestivalPass::find()
            .filter(entity::festival_pass::Column::Status.eq(status))
            .order_by_asc(entity::festival_pass::Column::CreatedAt)
            .order_by_asc(entity::festival_pass::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves a pass from `from` to `to`
    ///
    /// The update only applies while the pass is still in `from`, returns the number of rows
    /// affected so callers can detect a concurrent transition.
    pub async fn update_status(
        &self,
        pass_id: i32,
        from: PassStatus,
        to: PassStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::FestivalPass::update_many()
            .set(entity::festival_pass::ActiveModel {
                status: ActiveValue::Set(to),
                ..Default::default()
            })
            .filter(entity::festival_pass::Column::Id.eq(pass_id))
            .filter(entity::festival_pass::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Stamps the check-in time on a pass which has not been checked in yet
    ///
    /// Returns the number of rows affected, 0 means the pass was already checked in.
    pub async fn mark_checked_in(&self, pass_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FestivalPass::update_many()
            .col_expr(
                entity::festival_pass::Column::CheckedInAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::festival_pass::Column::Id.eq(pass_id))
            .filter(entity::festival_pass::Column::CheckedInAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts passes and sums their `amount_paid` per status
    ///
    /// Statuses without any pass are absent from the result.
    pub async fn totals_by_status(&self) -> Result<Vec<(PassStatus, i64, i64)>, DbErr> {
        let rows: Vec<(PassStatus, i64, Option<i64>)> = entity::prelude::FestivalPass::find()
            .select_only()
            .column(entity::festival_pass::Column::Status)
            .column_as(entity::festival_pass::Column::Id.count(), "passes")
            .column_as(
                entity::festival_pass::Column::AmountPaid
                    .sum()
                    .cast_as(Alias::new("BIGINT")),
                "revenue",
            )
            .group_by(entity::festival_pass::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(status, passes, revenue)| (status, passes, revenue.unwrap_or(0)))
            .collect())
    }

    /// Counts passes sold and their revenue per coupon ID, ignoring rejected passes
    pub async fn sales_by_coupon(&self) -> Result<Vec<(i32, i64, i64)>, DbErr> {
        let rows: Vec<(i32, i64, Option<i64>)> = entity::prelude::FestivalPass::find()
            .select_only()
            .column(entity::festival_pass::Column::CouponId)
            .column_as(entity::festival_pass::Column::Id.count(), "passes")
            .column_as(
                entity::festival_pass::Column::AmountPaid
                    .sum()
                    .cast_as(Alias::new("BIGINT")),
                "revenue",
            )
            .filter(entity::festival_pass::Column::CouponId.is_not_null())
            .filter(entity::festival_pass::Column::Status.ne(PassStatus::Rejected))
            .group_by(entity::festival_pass::Column::CouponId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(coupon_id, passes, revenue)| (coupon_id, passes, revenue.unwrap_or(0)))
            .collect())
    }
}
