use axum::http::StatusCode;
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};

use crate::helpers::{TEST_ACCOUNTS, TestApp, basic_auth};

#[tokio::test]
async fn should_deny_index_without_credentials() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(
        response
            .headers()
            .get(WWW_AUTHENTICATE)
            .is_some_and(|v| v.to_str().unwrap().starts_with("Basic")),
        "expected a Basic challenge"
    );
}

#[tokio::test]
async fn should_allow_index_for_every_configured_account() {
    let app = TestApp::new().await;

    for (user, password) in TEST_ACCOUNTS {
        let response = app
            .server
            .get("/")
            .add_header(AUTHORIZATION, basic_auth(user, password))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK, "account {user}");
        assert!(response.text().contains("href=\"/create/\""));
    }
}

#[tokio::test]
async fn should_not_reveal_whether_username_exists() {
    let app = TestApp::new().await;

    let wrong_password = app
        .server
        .get("/")
        .add_header(AUTHORIZATION, basic_auth("andy", "wrong"))
        .await;
    let unknown_user = app
        .server
        .get("/")
        .add_header(AUTHORIZATION, basic_auth("mallory", "password"))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_user.text());
}

#[tokio::test]
async fn should_leave_other_routes_open() {
    let app = TestApp::new().await;

    for path in ["/create/", "/all/", "/update/", "/delete/"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "GET {path}");
    }
}

#[tokio::test]
async fn should_answer_health_checks() {
    let app = TestApp::new().await;

    assert_eq!(app.server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(app.server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_echo_request_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/healthz").await;

    assert!(response.headers().contains_key("x-request-id"));
}
