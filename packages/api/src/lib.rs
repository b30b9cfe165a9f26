//! # API crate — request-independent logic for the guessing game and quiz dashboard
//!
//! Everything the HTTP layer in `web` calls lives here, so the rules can be
//! exercised without a running server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`game`] | Guess evaluation, guess parsing, and the per-session [`game::GuessSession`] |
//! | [`auth`] | Credential lookup against a [`store::QuizStore`] and the logged-in user kept in the session |
//! | [`quizzes`] | Listing every quiz for the dashboard |
//! | [`db`] | PostgreSQL-backed [`store::QuizStore`], one connection per call |
//! | [`models`] | Session-safe projections of store records ([`UserInfo`]) |
//! | [`settings`] | Layered configuration (defaults, `config.toml`, `APP_*` environment) |
//!
//! ## Error policy
//!
//! Store operations return [`store::StoreError`]. The `try_*` functions pass it
//! through; [`auth::authenticate`] and [`quizzes::list_quizzes`] log it and fold it
//! into "no user" / "no quizzes", which is what the pages show.

pub mod auth;
pub mod db;
pub mod game;
pub mod models;
pub mod quizzes;
pub mod settings;

pub use models::UserInfo;
pub use settings::Settings;
