mod common;

use api::settings::Session;
use axum::http::StatusCode;
use common::{get, post_form};
use store::{MemoryStore, Quiz, QuizStore, StoreError, User};

const INVALID: &str = "Invalid username or password";

/// A store whose every call fails, as if the database were down.
#[derive(Clone)]
struct BrokenStore;

impl QuizStore for BrokenStore {
    async fn find_user(&self, _: &str, _: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Connect("connection refused".into()))
    }

    async fn all_quizzes(&self) -> Result<Vec<Quiz>, StoreError> {
        Err(StoreError::Connect("connection refused".into()))
    }
}

fn app() -> axum::Router {
    let store = MemoryStore::new()
        .with_users([User::new(1, "alice", "pw1")])
        .with_quizzes([Quiz::new(1, "Geography"), Quiz::new(2, "History")]);
    web::quiz_dashboard::app(store, &Session::default())
}

#[tokio::test]
async fn test_login_form() {
    let reply = get(&app(), "/login", None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("action=\"/login\""));
    assert!(!reply.body.contains(INVALID));
}

#[tokio::test]
async fn test_root_redirects_to_login() {
    let reply = get(&app(), "/", None).await;

    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn test_login_success_redirects_to_dashboard() {
    let app = app();

    let reply = post_form(&app, "/login", "username=alice&password=pw1", None).await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/dashboard"));
    let cookie = reply.cookie.expect("login should start a session");

    let reply = get(&app, "/dashboard", Some(&cookie)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Logged in as alice"));
    assert!(reply.body.contains("Geography"));
    assert!(reply.body.contains("History"));
    // The password never reaches a page
    assert!(!reply.body.contains("pw1"));
}

#[tokio::test]
async fn test_login_failure() {
    let app = app();

    for form in [
        "username=alice&password=wrong",
        "username=bob&password=pw1",
        "username=ALICE&password=pw1",
        "username=alice",
        "",
    ] {
        let reply = post_form(&app, "/login", form, None).await;
        assert_eq!(reply.status, StatusCode::OK, "form={form}");
        assert!(reply.body.contains(INVALID), "form={form}");
        assert!(reply.cookie.is_none(), "form={form}");
    }
}

#[tokio::test]
async fn test_repeated_fields_use_first_value() {
    let app = app();

    let form = "username=alice&password=pw1&username=bob&password=wrong";
    let reply = post_form(&app, "/login", form, None).await;
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some("/dashboard"));

    let form = "username=bob&username=alice&password=pw1";
    let reply = post_form(&app, "/login", form, None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(INVALID));
}

#[tokio::test]
async fn test_dashboard_without_login() {
    let reply = get(&app(), "/dashboard", None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Geography"));
    assert!(!reply.body.contains("Logged in as"));
}

#[tokio::test]
async fn test_store_failure_looks_like_no_data() {
    let app = web::quiz_dashboard::app(BrokenStore, &Session::default());

    let reply = post_form(&app, "/login", "username=alice&password=pw1", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains(INVALID));

    let reply = get(&app, "/dashboard", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("No quizzes available."));
}
