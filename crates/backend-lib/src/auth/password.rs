// ============================
// userdesk-backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
use scrypt::{
    password_hash::{
        rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Params, Scrypt,
};
use std::fmt;
use thiserror::Error;
use zeroize::Zeroize;

/// scrypt cost: N = 2^15, r = 8, p = 1 (~32 MiB per hash)
const SCRYPT_LOG_N: u8 = 15;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Errors raised by the hashing primitive (never by a plain mismatch)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("stored password hash is malformed")]
    MalformedHash,
}

/// A one-way password credential. Only the PHC-formatted hash is kept.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Derive a salted scrypt hash from `plaintext`
    pub fn set(plaintext: &str) -> Result<Self, PasswordError> {
        let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, Params::RECOMMENDED_LEN)
            .map_err(|e| PasswordError::Hashing(e.to_string()))?;
        let salt = SaltString::generate(&mut OsRng);
        let hash = Scrypt
            .hash_password_customized(plaintext.as_bytes(), None, None, params, &salt)
            .map_err(|e| PasswordError::Hashing(e.to_string()))?
            .to_string();
        Ok(Self { hash })
    }

    /// Hash `plaintext` and wipe the caller's buffer afterwards
    pub fn set_secure(plaintext: &mut String) -> Result<Self, PasswordError> {
        let password = Self::set(plaintext);
        plaintext.zeroize();
        password
    }

    /// Check `plaintext` against the stored hash.
    ///
    /// A wrong password is `Ok(false)`; only a broken hash or primitive is an error.
    pub fn matches(&self, plaintext: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(&self.hash).map_err(|_| PasswordError::MalformedHash)?;
        match Scrypt.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::Hashing(e.to_string())),
        }
    }

    /// The PHC string (`$scrypt$ln=15,r=8,p=1$...`)
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Wrap an already-derived hash
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, PasswordError> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(PasswordError::MalformedHash);
        }
        Ok(Self { hash })
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
