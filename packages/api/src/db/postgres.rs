//! Connection-per-call PostgreSQL store.

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use store::{Quiz, QuizStore, StoreError, User};

use crate::settings::Database;

/// Database backed user
#[derive(sqlx::FromRow, Clone)]
struct SqlUser {
    id: i32,
    username: String,
    password: String,
}

impl SqlUser {
    fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            password: self.password,
        }
    }
}

/// Database backed quiz
#[derive(sqlx::FromRow, Clone)]
struct SqlQuiz {
    id: i32,
    subject: String,
}

impl SqlQuiz {
    fn into_quiz(self) -> Quiz {
        Quiz {
            id: self.id,
            subject: self.subject,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PostgresStore {
    options: PgConnectOptions,
    target: String,
}

impl PostgresStore {
    pub fn new(database: &Database) -> Self {
        let options = PgConnectOptions::new()
            .host(&database.host)
            .port(database.port)
            .username(&database.user)
            .password(&database.password)
            .database(&database.database);

        Self {
            options,
            target: database.target(),
        }
    }

    async fn connect(&self) -> Result<PgConnection, StoreError> {
        PgConnection::connect_with(&self.options).await.map_err(|e| {
            tracing::debug!(target_db = %self.target, error = %e, "Store connection failed");
            StoreError::Connect(Box::new(e))
        })
    }

    /// Run `SELECT 1` on a fresh connection.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        finish(conn, result).await?;
        tracing::info!(target_db = %self.target, "Connected to database");
        Ok(())
    }
}

/// Close `conn`, then surface the query result.
async fn finish<T>(conn: PgConnection, result: Result<T, sqlx::Error>) -> Result<T, StoreError> {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close store connection");
    }
    result.map_err(|e| StoreError::Query(Box::new(e)))
}

impl QuizStore for PostgresStore {
    async fn find_user(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        let mut conn = self.connect().await?;
        let result: Result<Option<SqlUser>, _> = sqlx::query_as(
            "SELECT id, username, password FROM users WHERE username = $1 AND password = $2",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&mut conn)
        .await;

        Ok(finish(conn, result).await?.map(SqlUser::into_user))
    }

    async fn all_quizzes(&self) -> Result<Vec<Quiz>, StoreError> {
        let mut conn = self.connect().await?;
        let result: Result<Vec<SqlQuiz>, _> = sqlx::query_as("SELECT id, subject FROM quizzes")
            .fetch_all(&mut conn)
            .await;

        Ok(finish(conn, result)
            .await?
            .into_iter()
            .map(SqlQuiz::into_quiz)
            .collect())
    }
}
