use entity::sea_orm_active_enums::PassStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::finance::FinanceSummaryDto,
    server::{
        data::{credit::CreditRepository, pass::PassRepository, team::TeamRepository},
        error::Error,
    },
};

pub struct FinanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceService<'a> {
    /// Creates a new instance of [`FinanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates revenue, outstanding credit and pass counts
    ///
    /// Rejected passes are counted but their payments are not part of the revenue.
    pub async fn summary(&self) -> Result<FinanceSummaryDto, Error> {
        let pass_totals = PassRepository::new(self.db).totals_by_status().await?;

        let mut summary = FinanceSummaryDto {
            pass_revenue: 0,
            registration_revenue: TeamRepository::new(self.db).total_amount_paid().await?,
            outstanding_credit: CreditRepository::new(self.db).total_unused().await?,
            active_passes: 0,
            pending_passes: 0,
            rejected_passes: 0,
        };

        for (status, passes, revenue) in pass_totals {
            let passes = passes.max(0) as u64;

            match status {
                PassStatus::Active => summary.active_passes = passes,
                PassStatus::PendingVerification => summary.pending_passes = passes,
                PassStatus::Rejected => {
                    summary.rejected_passes = passes;
                    continue;
                }
            }

            summary.pass_revenue += revenue;
        }

        Ok(summary)
    }
}
