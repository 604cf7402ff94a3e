use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository, error::Error, model::db::UserModel,
    service::retry::RetryContext,
};

/// Service for reading festival accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an account by ID, retrying transient database failures.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - Account found
    /// - `Ok(None)` - Account not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let user_repo = UserRepository::new(&db);

                Ok(user_repo.get(user_id).await?)
            })
        })
        .await
    }
}
