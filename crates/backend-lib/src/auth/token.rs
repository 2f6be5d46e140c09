// ============================
// userdesk-backend-lib/src/auth/token.rs
// ============================
//! Signed, expiring session tokens (HS256 JWT).
//!
//! Access tokens carry the user's identity; refresh tokens only carry the
//! registered claims and are meant for a renewal flow.
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Closed taxonomy of token failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token invalid")]
    Invalid,

    #[error("token malformed")]
    Malformed,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token is expired")]
    Expired,

    #[error("token is not valid yet")]
    NotYetValid,

    #[error("unexpected signing method")]
    UnexpectedAlgorithm,

    #[error("could not handle this token")]
    Unknown,

    #[error("error signing token: {0}")]
    Signing(String),
}

/// Standard JWT claims. `exp` is always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegisteredClaims {
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaims {
    /// Subject user id, as a decimal string
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub registered: RegisteredClaims,
}

/// Sign an access token for `claims`
pub fn issue_access_token(claims: &UserClaims, secret: &str) -> Result<String, TokenError> {
    sign(claims, secret)
}

/// Sign a refresh token; it carries no identity fields
pub fn issue_refresh_token(claims: &RegisteredClaims, secret: &str) -> Result<String, TokenError> {
    sign(claims, secret)
}

/// Verify an access token and return its claims
pub fn verify_access_token(token: &str, secret: &str) -> Result<UserClaims, TokenError> {
    verify(token, secret)
}

/// Verify a refresh token and return its claims
pub fn verify_refresh_token(token: &str, secret: &str) -> Result<RegisteredClaims, TokenError> {
    verify(token, secret)
}

fn sign<C: Serialize>(claims: &C, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::new(SIGNING_ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

fn verify<C: DeserializeOwned>(token: &str, secret: &str) -> Result<C, TokenError> {
    if token.trim().is_empty() {
        return Err(TokenError::Invalid);
    }

    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.leeway = 0;
    validation.validate_nbf = true;

    decode::<C>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| classify(e.kind()))
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::Malformed,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::ImmatureSignature => TokenError::NotYetValid,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::UnexpectedAlgorithm
        },
        _ => TokenError::Unknown,
    }
}
