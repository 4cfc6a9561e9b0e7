//! Shared-key login and bearer token handling.
//!
//! Staff authenticate with a username/access-key pair from the configured
//! allow-list and receive an HS256 JWT. The token carries only the username;
//! every protected route re-verifies signature and expiry.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{Credential, SecurityConfig};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(username: impl Into<String>, issued_at: DateTime<Utc>, expiry_hours: u64) -> Self {
        let exp = issued_at + Duration::hours(expiry_hours as i64);
        Self {
            sub: username.into(),
            exp: exp.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token generation failed: {0}")]
    TokenGeneration(String),
}

/// A freshly issued session.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Check the pair against the allow-list and issue a token on match.
pub fn login(security: &SecurityConfig, username: &str, access_key: &str) -> Result<IssuedToken, AuthError> {
    let credential = find_credential(&security.credentials, username, access_key)
        .ok_or(AuthError::InvalidCredentials)?;

    let claims = Claims::new(&credential.username, Utc::now(), security.jwt_expiry_hours);
    let expires_at = claims.expires_at();
    let token = generate_jwt(&claims, &security.jwt_secret)?;

    Ok(IssuedToken {
        token,
        username: credential.username.clone(),
        expires_at,
    })
}

fn find_credential<'a>(credentials: &'a [Credential], username: &str, access_key: &str) -> Option<&'a Credential> {
    credentials
        .iter()
        .find(|c| c.username == username && c.access_key == access_key)
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::TokenGeneration("JWT secret not configured".to_string()));
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry of a bearer token.
pub fn authenticate(token: Option<&str>, secret: &str) -> Result<Claims, AuthError> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(AuthError::MissingToken)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}
