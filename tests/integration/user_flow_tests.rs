use axum::http::{Method, StatusCode};
use serde_json::json;
use userdesk_backend_lib::auth::token::verify_access_token;
use crate::test_utils::{register, register_body, send, setup_test_app, TEST_SECRET};

fn update_body(version: i32) -> String {
    json!({
        "first_name": "UpdatedFoo",
        "last_name": "UpdatedBar",
        "username": "updatedfoobar",
        "email": "foobar@updated.es",
        "version": version,
    })
    .to_string()
}

#[tokio::test]
async fn test_full_user_lifecycle() {
    let (state, app) = setup_test_app();

    // Register
    let res = send(
        &app,
        Method::POST,
        "/v1/users",
        Some(&register_body("foobar", "foobar@test.es")),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["message"], "User created successfully");
    assert_eq!(res.body["user"]["username"], "foobar");
    assert!(res.body["user"].get("password").is_none());
    let id = res.body["user"]["id"].as_i64().unwrap();

    // Login
    let res = send(
        &app,
        Method::POST,
        "/v1/login",
        Some(r#"{"username": "foobar", "password": "foobar$123"}"#),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    let token = res.cookie("access_token").expect("access_token cookie");
    let claims = verify_access_token(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.username, "foobar");
    assert_eq!(claims.id, id.to_string());

    // Update with the current version
    let uri = format!("/v1/users/{id}");
    let res = send(&app, Method::PUT, &uri, Some(&update_body(0)), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["firstname"], "UpdatedFoo");
    assert_eq!(state.users.get_by_id(id).unwrap().version, 1);

    // Same version again is stale
    let res = send(&app, Method::PUT, &uri, Some(&update_body(0)), None).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(
        res.body["error"],
        "unable to update the record due to an edit conflict, please try again"
    );

    // Delete, then it is gone
    let res = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "User deleted successfully");

    let res = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_and_show() {
    let (_state, app) = setup_test_app();
    let foo = register(&app, "foobar", "foobar@test.es").await;
    register(&app, "quxtoto", "quxtoto@test.es").await;

    let res = send(&app, Method::GET, "/v1/users", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    let users = res.body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "foobar");
    assert_eq!(users[1]["username"], "quxtoto");

    let res = send(&app, Method::GET, &format!("/v1/users/{foo}"), None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user"]["email"], "foobar@test.es");
    assert_eq!(res.body["user"]["version"], 0);
}

#[tokio::test]
async fn test_register_validation_and_duplicates() {
    let (state, app) = setup_test_app();
    register(&app, "foobar", "foobar@test.es").await;

    let res = send(&app, Method::POST, "/v1/users", Some("{}"), None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["errors"]["first_name"], "firstname is required");
    assert_eq!(res.body["errors"]["password"], "password is required");

    let res = send(
        &app,
        Method::POST,
        "/v1/users",
        Some(&register_body("foobar", "other@test.es")),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body["errors"]["username"],
        "the username foobar is being used"
    );

    let res = send(
        &app,
        Method::POST,
        "/v1/users",
        Some(&register_body("other", "FOOBAR@test.es")),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body["errors"]["email"],
        "the email foobar@test.es is being used"
    );

    assert_eq!(state.users.get_all().len(), 1);
}

#[tokio::test]
async fn test_update_errors() {
    let (_state, app) = setup_test_app();
    let foo = register(&app, "foobar", "foobar@test.es").await;
    register(&app, "quxtoto", "quxtoto@test.es").await;

    // Missing user
    let res = send(&app, Method::PUT, "/v1/users/99", Some(&update_body(0)), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    // Invalid fields
    let res = send(
        &app,
        Method::PUT,
        &format!("/v1/users/{foo}"),
        Some(r#"{"first_name": "A", "last_name": "B", "username": "ab", "email": "nope"}"#),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["errors"]["email"], "email is not valid");

    // Taking another user's username
    let body = json!({
        "first_name": "Foo",
        "last_name": "Bar",
        "username": "quxtoto",
        "email": "foobar@test.es",
        "version": 0,
    })
    .to_string();
    let res = send(&app, Method::PUT, &format!("/v1/users/{foo}"), Some(&body), None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body["errors"]["username"],
        "the username quxtoto is being used"
    );
}

#[tokio::test]
async fn test_body_decode_errors() {
    let (_state, app) = setup_test_app();

    let res = send(&app, Method::POST, "/v1/users", Some(""), None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "body must not be empty");

    let res = send(&app, Method::POST, "/v1/users", Some(r#"{"username": "#), None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "body contains badly-formed JSON");

    let res = send(&app, Method::POST, "/v1/users", Some(r#"{"username": 5}"#), None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.body["error"],
        r#"body contains incorrect JSON type for field "username""#
    );
}

#[tokio::test]
async fn test_delete_missing_user() {
    let (_state, app) = setup_test_app();
    let res = send(&app, Method::DELETE, "/v1/users/1", None, None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "the requested resource could not be found");
}
