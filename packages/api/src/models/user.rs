//! # Logged-in user kept in the session
//!
//! [`store::User`] carries the plaintext password because lookups compare it.
//! [`UserInfo`] is the subset that is allowed to live in the session store and
//! reach a rendered page: the id and the username.

use serde::{Deserialize, Serialize};
use store::User;

/// User information safe to keep in the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_drops_password() {
        let user = User::new(1, "alice", "pw1");
        let info = UserInfo::from(&user);

        assert_eq!(info.id, 1);
        assert_eq!(info.username, "alice");
    }
}
