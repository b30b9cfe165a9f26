//! # Store seam for the quiz dashboard
//!
//! [`QuizStore`] is the only way the dashboard reaches persisted data. It has
//! two read operations and no writes:
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`find_user`](QuizStore::find_user) | Returns the user whose username **and** password match exactly, or `None`. |
//! | [`all_quizzes`](QuizStore::all_quizzes) | Returns every quiz in store order. No filtering, no paging. |
//!
//! Both return a typed [`StoreError`] on failure so that callers decide whether
//! to surface it or fold it into an empty result. Implementations live in
//! [`crate::memory`] (tests, local demo) and in the `api` crate (PostgreSQL).

use std::future::Future;

use crate::error::StoreError;
use crate::models::{Quiz, User};

/// Read access to the `users` and `quizzes` tables.
pub trait QuizStore: Clone + Send + Sync + 'static {
    fn find_user(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    fn all_quizzes(&self) -> impl Future<Output = Result<Vec<Quiz>, StoreError>> + Send;
}
