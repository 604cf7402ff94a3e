use sea_orm::DatabaseConnection;

use crate::server::config::DEFAULT_STUDENT_EMAIL_DOMAIN;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Email domain required for student pass purchases
    pub student_email_domain: String,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            student_email_domain: DEFAULT_STUDENT_EMAIL_DOMAIN.to_string(),
        }
    }
}
