//! Store error type.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure talking to a [`crate::QuizStore`].
///
/// "No matching row" is never an error; lookups return `Ok(None)` or an empty
/// list for that.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to store: {0}")]
    Connect(#[source] BoxError),

    #[error("store query failed: {0}")]
    Query(#[source] BoxError),
}
