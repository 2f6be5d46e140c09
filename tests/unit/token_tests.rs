use chrono::{Duration, Utc};
use userdesk_backend_lib::auth::token::{
    issue_access_token, issue_refresh_token, verify_access_token, verify_refresh_token,
    RegisteredClaims, UserClaims,
};
use userdesk_backend_lib::auth::TokenError;

const SECRET: &str = "TokenTestsSecret";

fn claims(exp: i64, nbf: Option<i64>) -> UserClaims {
    UserClaims {
        id: "1".to_string(),
        username: "foobar".to_string(),
        email: "foobar@test.es".to_string(),
        first_name: "Foo".to_string(),
        last_name: "Bar".to_string(),
        registered: RegisteredClaims {
            exp,
            nbf,
            ..RegisteredClaims::default()
        },
    }
}

#[test]
fn test_access_token_carries_identity() {
    let exp = (Utc::now() + Duration::hours(24)).timestamp();
    let token = issue_access_token(&claims(exp, None), SECRET).unwrap();

    let parsed = verify_access_token(&token, SECRET).unwrap();
    assert_eq!(parsed.username, "foobar");
    assert_eq!(parsed.email, "foobar@test.es");
    assert_eq!(parsed.registered.exp, exp);
}

#[test]
fn test_verification_failures() {
    let now = Utc::now();
    let valid = issue_access_token(&claims((now + Duration::hours(1)).timestamp(), None), SECRET)
        .unwrap();

    assert_eq!(
        verify_access_token(&valid, "another-secret").unwrap_err(),
        TokenError::InvalidSignature
    );
    assert_eq!(verify_access_token("", SECRET).unwrap_err(), TokenError::Invalid);
    assert_eq!(
        verify_access_token("a.b.c", SECRET).unwrap_err(),
        TokenError::Malformed
    );

    let expired =
        issue_access_token(&claims((now - Duration::minutes(5)).timestamp(), None), SECRET)
            .unwrap();
    assert_eq!(
        verify_access_token(&expired, SECRET).unwrap_err(),
        TokenError::Expired
    );

    let early = issue_access_token(
        &claims(
            (now + Duration::hours(2)).timestamp(),
            Some((now + Duration::hours(1)).timestamp()),
        ),
        SECRET,
    )
    .unwrap();
    assert_eq!(
        verify_access_token(&early, SECRET).unwrap_err(),
        TokenError::NotYetValid
    );
}

#[test]
fn test_refresh_token() {
    let registered = RegisteredClaims {
        exp: (Utc::now() + Duration::days(7)).timestamp(),
        sub: Some("1".to_string()),
        ..RegisteredClaims::default()
    };
    let token = issue_refresh_token(&registered, SECRET).unwrap();
    assert_eq!(verify_refresh_token(&token, SECRET).unwrap(), registered);
}
