//! # Web crate — HTTP surface of the guessing game and the quiz dashboard
//!
//! Two independent applications share this crate. Each has a router module and a
//! binary in `src/bin`:
//!
//! | App | Module | Binary | Routes |
//! |-----|--------|--------|--------|
//! | Guessing game | [`guess_game`] | `guess-game` | `GET /guessGame?guess=N` |
//! | Quiz dashboard | [`quiz_dashboard`] | `quiz-dashboard` | `GET /login`, `POST /login`, `GET /dashboard` |
//!
//! Both routers read and write per-browser state through a
//! [`tower_sessions::Session`], so each is wrapped in the layer built by
//! [`server::session_layer`]. Pages are rendered by the `ui` crate.

pub mod error;
pub mod guess_game;
pub mod params;
pub mod quiz_dashboard;
pub mod server;

pub use error::AppError;
