//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and all operations are queued and executed during
//! the final `build()` call.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_festival_tables: bool,

    // (email, role)
    users: Vec<(String, UserRole)>,
    // (name, fee, min_team_size, max_team_size)
    events: Vec<(String, i64, i32, i32)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_festival_tables: false,
            users: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Add every festival table to the test database.
    ///
    /// Tables are created in foreign key order: users, events, coupons, passes, teams, team
    /// members, registrations and credits.
    pub fn with_festival_tables(mut self) -> Self {
        self.include_festival_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// ```no_run
    /// use festival_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), festival_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(FestivalUser)
    ///     .with_table(FestivalEvent)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided email and role during `build()`.
    pub fn with_user(mut self, email: impl Into<String>, role: UserRole) -> Self {
        self.users.push((email.into(), role));
        self
    }

    /// Insert an event during `build()`.
    pub fn with_event(
        mut self,
        name: impl Into<String>,
        fee: i64,
        min_team_size: i32,
        max_team_size: i32,
    ) -> Self {
        self.events
            .push((name.into(), fee, min_team_size, max_team_size));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_festival_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::FestivalUser),
                schema.create_table_from_entity(entity::prelude::FestivalEvent),
                schema.create_table_from_entity(entity::prelude::FestivalCoupon),
                schema.create_table_from_entity(entity::prelude::FestivalPass),
                schema.create_table_from_entity(entity::prelude::FestivalTeam),
                schema.create_table_from_entity(entity::prelude::FestivalTeamMember),
                schema.create_table_from_entity(entity::prelude::FestivalRegistration),
                schema.create_table_from_entity(entity::prelude::FestivalCredit),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (email, role) in self.users {
            setup.user().insert_user(&email, role).await?;
        }

        for (name, fee, min_team_size, max_team_size) in self.events {
            setup
                .event()
                .insert_event(&name, fee, min_team_size, max_team_size)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
