//! # Domain models for users and quizzes
//!
//! Read-only projections of rows held by a [`crate::QuizStore`]. A store builds
//! these fresh for every lookup and nothing caches them afterwards.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A row of the `users` table. The password is kept in plaintext because lookups compare it verbatim. |
//! | [`Quiz`] | A row of the `quizzes` table: numeric id plus the subject shown on the dashboard. |

/// A user record as stored, password included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// A quiz listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub id: i32,
    pub subject: String,
}

impl Quiz {
    pub fn new(id: i32, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
        }
    }
}
