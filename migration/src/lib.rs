pub use sea_orm_migration::prelude::*;

mod m20251101_000001_festival_user;
mod m20251101_000002_festival_event;
mod m20251101_000003_festival_coupon;
mod m20251101_000004_festival_pass;
mod m20251101_000005_festival_team;
mod m20251101_000006_festival_team_member;
mod m20251101_000007_festival_registration;
mod m20251101_000008_festival_credit;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_festival_user::Migration),
            Box::new(m20251101_000002_festival_event::Migration),
            Box::new(m20251101_000003_festival_coupon::Migration),
            Box::new(m20251101_000004_festival_pass::Migration),
            Box::new(m20251101_000005_festival_team::Migration),
            Box::new(m20251101_000006_festival_team_member::Migration),
            Box::new(m20251101_000007_festival_registration::Migration),
            Box::new(m20251101_000008_festival_credit::Migration),
        ]
    }
}
