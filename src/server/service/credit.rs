use sea_orm::DatabaseConnection;

use crate::{
    model::credit::{CreditBalanceDto, CreditDto},
    server::{data::credit::CreditRepository, error::Error},
};

pub struct CreditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CreditService<'a> {
    /// Creates a new instance of [`CreditService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the unredeemed credits of a user together with their total
    pub async fn get_balance(&self, user_id: i32) -> Result<CreditBalanceDto, Error> {
        let credits = CreditRepository::new(self.db)
            .get_unused_by_user_id(user_id)
            .await?;

        let balance = credits.iter().map(|c| c.amount).sum();
        let credits = credits
            .into_iter()
            .map(|c| CreditDto {
                id: c.id,
                amount: c.amount,
                reason: c.reason,
                related_team_id: c.related_team_id,
                related_event_id: c.related_event_id,
                created_at: c.created_at,
            })
            .collect();

        Ok(CreditBalanceDto { balance, credits })
    }
}
