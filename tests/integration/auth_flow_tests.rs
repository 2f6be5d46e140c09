use axum::http::{Method, StatusCode};
use crate::test_utils::{register, send, setup_test_app};

const LOGIN: &str = r#"{"username": "foobar", "password": "foobar$123"}"#;

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let (_state, app) = setup_test_app();
    register(&app, "foobar", "foobar@test.es").await;

    let res = send(&app, Method::POST, "/v1/login", Some(LOGIN), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["username"], "foobar");

    let cookie = res
        .cookies
        .iter()
        .find(|c| c.starts_with("access_token="))
        .expect("access_token cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=3600"));
}

#[tokio::test]
async fn test_login_failures_look_alike() {
    let (_state, app) = setup_test_app();
    register(&app, "foobar", "foobar@test.es").await;

    let unknown = send(
        &app,
        Method::POST,
        "/v1/login",
        Some(r#"{"username": "nobody", "password": "foobar$123"}"#),
        None,
    )
    .await;
    let wrong = send(
        &app,
        Method::POST,
        "/v1/login",
        Some(r#"{"username": "foobar", "password": "wrongpass"}"#),
        None,
    )
    .await;

    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.body, wrong.body);
    assert_eq!(unknown.body["error"], "wrong credentials");
    assert!(unknown.cookies.is_empty());
}

#[tokio::test]
async fn test_login_validation() {
    let (_state, app) = setup_test_app();
    let res = send(
        &app,
        Method::POST,
        "/v1/login",
        Some(r#"{"username": "   "}"#),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["errors"]["username"], "The username is required");
    assert_eq!(res.body["errors"]["password"], "The password is required");
}

#[tokio::test]
async fn test_me_behind_gate() {
    let (_state, app) = setup_test_app();
    let id = register(&app, "foobar", "foobar@test.es").await;

    let res = send(&app, Method::GET, "/v1/me", None, None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["error"], "missing access token");

    let login = send(&app, Method::POST, "/v1/login", Some(LOGIN), None).await;
    let token = login.cookie("access_token").unwrap();

    let res = send(
        &app,
        Method::GET,
        "/v1/me",
        None,
        Some(&format!("access_token={token}")),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["id"], id);
    assert_eq!(res.body["user"]["username"], "foobar");
    assert_eq!(res.body["user"]["firstname"], "Foo");

    let res = send(
        &app,
        Method::GET,
        "/v1/me",
        None,
        Some("access_token=tampered.token.value"),
    )
    .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}
