//! Guessing game routes.

use api::{game, settings};
use axum::{
    extract::Query,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use dioxus::prelude::*;
use tower_sessions::Session;
use ui::GuessGamePage;

use crate::{
    error::AppError,
    params::{self, Pairs},
    server::session_layer,
};

/// Game routes without a session layer.
pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/guessGame") }))
        .route("/guessGame", get(guess_handler))
}

/// Game routes with their session layer.
pub fn app(settings: &settings::Session) -> Router {
    router().layer(session_layer(settings))
}

async fn guess_handler(
    session: Session,
    Query(query): Query<Pairs>,
) -> Result<Html<String>, AppError> {
    let round = game::play(&session, params::first(&query, "guess")).await?;

    let feedback = round.feedback.map(|f| f.to_string());
    let guesses = round.guesses;
    Ok(Html(ui::render(rsx! {
        GuessGamePage { feedback, guesses }
    })))
}
