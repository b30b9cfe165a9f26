use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::models::{Quiz, User};
use crate::repo::QuizStore;

/// In-memory QuizStore for testing and local runs without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<User>>>,
    quizzes: Arc<Mutex<Vec<Quiz>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(users);
        self
    }

    pub fn with_quizzes(self, quizzes: impl IntoIterator<Item = Quiz>) -> Self {
        self.quizzes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(quizzes);
        self
    }

    /// A small fixture set used by the demo binary.
    pub fn sample() -> Self {
        Self::new()
            .with_users([User::new(1, "beda@kth.se", "slask")])
            .with_quizzes([
                Quiz::new(1, "Geography"),
                Quiz::new(2, "History"),
                Quiz::new(3, "Science"),
            ])
    }
}

impl QuizStore for MemoryStore {
    async fn find_user(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().find(|u| u.matches(username, password)).cloned())
    }

    async fn all_quizzes(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self
            .quizzes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
