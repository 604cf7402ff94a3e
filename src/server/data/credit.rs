use chrono::Utc;
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::CreditModel;

pub struct CreditRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CreditRepository<'a, C> {
    /// Creates a new instance of [`CreditRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Issue a credit to a user
    ///
    /// # Arguments
    /// - `user_id`: ID of the user receiving the credit
    /// - `amount`: Credit value, always positive
    /// - `reason`: Human readable reason shown to the user
    /// - `related_team_id`: Team whose registration generated the credit
    /// - `related_event_id`: Event the registration was for
    pub async fn create(
        &self,
        user_id: i32,
        amount: i64,
        reason: String,
        related_team_id: Option<i32>,
        related_event_id: Option<i32>,
    ) -> Result<CreditModel, DbErr> {
        let credit = entity::festival_credit::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(amount),
            reason: ActiveValue::Set(reason),
            related_team_id: ActiveValue::Set(related_team_id),
            related_event_id: ActiveValue::Set(related_event_id),
            used: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        credit.insert(self.db).await
    }

    pub async fn get_unused_by_user_id(&self, user_id: i32) -> Result<Vec<CreditModel>, DbErr> {
        entity::prelude::FestivalCredit::find()
            .filter(entity::festival_credit::Column::UserId.eq(user_id))
            .filter(entity::festival_credit::Column::Used.eq(false))
            .order_by_asc(entity::festival_credit::Column::CreatedAt)
            .order_by_asc(entity::festival_credit::Column::Id)
            .all(self.db)
            .await
    }

    /// Flags the provided credits as used
    ///
    /// Only credits which are still unused are updated, the returned row count lets the caller
    /// detect credits consumed by a concurrent purchase.
    pub async fn mark_used(&self, credit_ids: &[i32]) -> Result<u64, DbErr> {
        if credit_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::FestivalCredit::update_many()
            .col_expr(entity::festival_credit::Column::Used, Expr::value(true))
            .filter(entity::festival_credit::Column::Id.is_in(credit_ids.iter().copied()))
            .filter(entity::festival_credit::Column::Used.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_many_by_team_id(&self, team_id: i32) -> Result<Vec<CreditModel>, DbErr> {
        entity::prelude::FestivalCredit::find()
            .filter(entity::festival_credit::Column::RelatedTeamId.eq(team_id))
            .all(self.db)
            .await
    }

    /// Sum of all credits not yet redeemed
    pub async fn total_unused(&self) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::FestivalCredit::find()
            .select_only()
            .column_as(
                entity::festival_credit::Column::Amount
                    .sum()
                    .cast_as(Alias::new("BIGINT")),
                "total",
            )
            .filter(entity::festival_credit::Column::Used.eq(false))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {

    mod get_unused_by_user_id {
        use entity::sea_orm_active_enums::UserRole;
        use festival_test_utils::prelude::*;

        use crate::server::data::credit::CreditRepository;

        /// Expect used credits and credits of other users to be excluded
        #[tokio::test]
        async fn returns_only_unused_credits_of_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_festival_tables().build().await?;
            let user = test.user().insert_user("a@example.com", UserRole::User).await?;
            let other = test.user().insert_user("b@example.com", UserRole::User).await?;
            test.credit().insert_credit(user.id, 250, false).await?;
            test.credit().insert_credit(user.id, 400, true).await?;
            test.credit().insert_credit(other.id, 300, false).await?;

            let credit_repo = CreditRepository::new(&test.db);
            let credits = credit_repo.get_unused_by_user_id(user.id).await?;

            assert_eq!(credits.len(), 1);
            assert_eq!(credits[0].amount, 250);

            Ok(())
        }
    }

    mod mark_used {
        use entity::sea_orm_active_enums::UserRole;
        use festival_test_utils::prelude::*;

        use crate::server::data::credit::CreditRepository;

        /// Expect already used credits to not be counted as affected
        #[tokio::test]
        async fn only_counts_unused_credits() -> Result<(), TestError> {
            let test = TestBuilder::new().with_festival_tables().build().await?;
            let user = test.user().insert_user("a@example.com", UserRole::User).await?;
            let unused = test.credit().insert_credit(user.id, 250, false).await?;
            let used = test.credit().insert_credit(user.id, 400, true).await?;

            let credit_repo = CreditRepository::new(&test.db);
            let affected = credit_repo.mark_used(&[unused.id, used.id]).await?;

            assert_eq!(affected, 1);
            assert!(credit_repo.get_unused_by_user_id(user.id).await?.is_empty());

            Ok(())
        }

        /// Expect no query and zero rows for an empty id list
        #[tokio::test]
        async fn empty_ids_affect_nothing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let credit_repo = CreditRepository::new(&test.db);
            let result = credit_repo.mark_used(&[]).await;

            assert!(matches!(result, Ok(0)));

            Ok(())
        }
    }

    mod total_unused {
        use entity::sea_orm_active_enums::UserRole;
        use festival_test_utils::prelude::*;

        use crate::server::data::credit::CreditRepository;

        /// Expect only unused credits to be summed
        #[tokio::test]
        async fn sums_unused_credits() -> Result<(), TestError> {
            let test = TestBuilder::new().with_festival_tables().build().await?;
            let user = test.user().insert_user("a@example.com", UserRole::User).await?;
            test.credit().insert_credit(user.id, 250, false).await?;
            test.credit().insert_credit(user.id, 300, false).await?;
            test.credit().insert_credit(user.id, 400, true).await?;

            let credit_repo = CreditRepository::new(&test.db);

            assert_eq!(credit_repo.total_unused().await?, 550);

            Ok(())
        }

        /// Expect zero rather than an error when there are no credits
        #[tokio::test]
        async fn zero_without_credits() -> Result<(), TestError> {
            let test = TestBuilder::new().with_festival_tables().build().await?;

            let credit_repo = CreditRepository::new(&test.db);

            assert_eq!(credit_repo.total_unused().await?, 0);

            Ok(())
        }
    }
}
