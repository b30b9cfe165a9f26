//! # Credential lookup for the quiz dashboard
//!
//! Credentials are compared verbatim by the store: case-sensitive, no
//! normalisation, no hashing. [`try_authenticate`] returns the store's typed
//! result; [`authenticate`] is what the login handler uses and reports a store
//! failure exactly like a wrong password, after logging it.

mod session;

pub use session::{current_user, login, SESSION_USER_KEY};

use store::{QuizStore, StoreError, User};

/// Look up the user matching both fields exactly.
pub async fn try_authenticate<S: QuizStore>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<Option<User>, StoreError> {
    store.find_user(username, password).await
}

/// Like [`try_authenticate`], but a store failure is logged and yields `None`.
pub async fn authenticate<S: QuizStore>(store: &S, username: &str, password: &str) -> Option<User> {
    match try_authenticate(store, username, password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, username, "User lookup failed");
            None
        }
    }
}
