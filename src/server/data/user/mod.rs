use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::FestivalUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds all users whose email is in `emails` with a single `IN` query
    ///
    /// Stored emails are compared lower-cased, `emails` must already be lower-case.
    pub async fn find_many_by_emails(&self, emails: &[String]) -> Result<Vec<UserModel>, DbErr> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FestivalUser::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::festival_user::Column::Email)))
                    .is_in(emails.iter().cloned()),
            )
            .all(self.db)
            .await
    }
}
