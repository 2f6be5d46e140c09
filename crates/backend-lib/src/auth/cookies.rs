//! Session cookies.
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Max-Age (seconds) applied when the caller has no better value
pub const DEFAULT_COOKIE_MAX_AGE: i64 = 3600;

pub fn access_token_cookie(token: String, max_age: i64) -> Cookie<'static> {
    session_cookie(ACCESS_TOKEN_COOKIE, token, max_age)
}

pub fn refresh_token_cookie(token: String, max_age: i64) -> Cookie<'static> {
    session_cookie(REFRESH_TOKEN_COOKIE, token, max_age)
}

fn session_cookie(name: &'static str, token: String, max_age: i64) -> Cookie<'static> {
    Cookie::build((name, token))
        .path("/")
        .max_age(Duration::seconds(max_age))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}
