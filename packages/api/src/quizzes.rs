//! Quiz listing for the dashboard.

use store::{Quiz, QuizStore, StoreError};

/// Every quiz in store order.
pub async fn try_list_quizzes<S: QuizStore>(store: &S) -> Result<Vec<Quiz>, StoreError> {
    store.all_quizzes().await
}

/// Like [`try_list_quizzes`], but a store failure is logged and yields an empty list.
pub async fn list_quizzes<S: QuizStore>(store: &S) -> Vec<Quiz> {
    try_list_quizzes(store).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Quiz listing failed");
        Vec::new()
    })
}
