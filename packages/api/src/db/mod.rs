//! # Database module — PostgreSQL-backed quiz store
//!
//! [`PostgresStore`] implements [`store::QuizStore`] against the `users` and
//! `quizzes` tables.
//!
//! ## Design
//!
//! There is no pool. Every store call opens its own connection from the
//! configured [`crate::settings::Database`], runs exactly one query, and closes
//! the connection before returning, whether or not the query succeeded. A
//! failed connect maps to [`store::StoreError::Connect`], a failed query to
//! [`store::StoreError::Query`].
//!
//! ## Expected tables
//!
//! ```sql
//! CREATE TABLE users   (id INTEGER PRIMARY KEY, username TEXT NOT NULL, password TEXT NOT NULL);
//! CREATE TABLE quizzes (id INTEGER PRIMARY KEY, subject TEXT NOT NULL);
//! ```

mod postgres;

pub use postgres::PostgresStore;
