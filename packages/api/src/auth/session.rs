//! Logged-in user stored in the session.

use store::User;
use tower_sessions::{session, Session};

use crate::models::UserInfo;

/// Key for storing the logged-in user in the session.
pub const SESSION_USER_KEY: &str = "currentUser";

/// Record `user` as the session's logged-in user.
pub async fn login(session: &Session, user: &User) -> Result<UserInfo, session::Error> {
    let info = UserInfo::from(user);
    session.insert(SESSION_USER_KEY, &info).await?;
    Ok(info)
}

/// The session's logged-in user, if any.
pub async fn current_user(session: &Session) -> Result<Option<UserInfo>, session::Error> {
    session.get(SESSION_USER_KEY).await
}
