use tower_sessions::Session;

use crate::server::{
    controller::util::get_user::get_user_from_session,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::auth::capability::{can, Action},
};

/// Resolves the logged in user and checks they may perform `action`
///
/// # Returns
/// - `Ok(UserModel)`: The caller, permitted to perform `action`
/// - `Err(Error::AuthError(AuthError::Forbidden))`: The caller's role doesn't allow `action`
/// - `Err(Error)`: See [`get_user_from_session`]
pub async fn authorize(
    state: &AppState,
    session: &Session,
    action: Action,
) -> Result<UserModel, Error> {
    let user = get_user_from_session(state, session).await?;

    if !can(user.role, action) {
        return Err(AuthError::Forbidden {
            user_id: user.id,
            action,
        }
        .into());
    }

    Ok(user)
}
