//! Quiz dashboard routes: login form, login submission, quiz listing.

use api::{auth, quizzes, settings};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use dioxus::prelude::*;
use store::QuizStore;
use tower_sessions::Session;
use ui::{DashboardPage, LoginPage};

use crate::{
    error::AppError,
    params::{self, Pairs},
    server::session_layer,
};

/// Shown for wrong credentials and for store failures alike.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Clone)]
pub struct DashboardState<S> {
    pub store: S,
}

/// Dashboard routes without a session layer.
pub fn router<S: QuizStore>(store: S) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/login") }))
        .route("/login", get(login_form).post(login::<S>))
        .route("/dashboard", get(dashboard::<S>))
        .with_state(DashboardState { store })
}

/// Dashboard routes with their session layer.
pub fn app<S: QuizStore>(store: S, settings: &settings::Session) -> Router {
    router(store).layer(session_layer(settings))
}

fn login_page(error_message: Option<String>) -> Html<String> {
    Html(ui::render(rsx! {
        LoginPage { error_message }
    }))
}

async fn login_form() -> Html<String> {
    login_page(None)
}

async fn login<S: QuizStore>(
    State(state): State<DashboardState<S>>,
    session: Session,
    Form(form): Form<Pairs>,
) -> Result<Response, AppError> {
    // Missing fields count as empty strings, which match no user
    let username = params::first(&form, "username").unwrap_or_default();
    let password = params::first(&form, "password").unwrap_or_default();

    let Some(user) = auth::authenticate(&state.store, username, password).await else {
        tracing::info!(%username, "Login failed");
        return Ok(login_page(Some(INVALID_CREDENTIALS.to_string())).into_response());
    };

    let info = auth::login(&session, &user).await?;
    tracing::info!(user_id = info.id, username = %info.username, "User logged in");

    Ok(Redirect::to("/dashboard").into_response())
}

async fn dashboard<S: QuizStore>(
    State(state): State<DashboardState<S>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = auth::current_user(&session).await?;
    let quizzes = quizzes::list_quizzes(&state.store).await;

    Ok(Html(ui::render(rsx! {
        DashboardPage { quizzes, user }
    })))
}
