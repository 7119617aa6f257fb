//! Authentication and authorization

use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use core_kernel::PartyId;
use domain_access::{ActingUser, RoleCode};

/// JWT claims. A user carries exactly one role code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// The user's single role code
    pub role: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Unknown role code: {0}")]
    UnknownRole(String),
    #[error("Malformed subject")]
    MalformedSubject,
}

/// Creates a new JWT token
pub fn create_token(
    user_id: PartyId,
    role: RoleCode,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.as_uuid().to_string(),
        role: role.as_str().to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

/// Resolves the acting user from validated claims
pub fn acting_user(claims: &Claims) -> Result<ActingUser, AuthError> {
    let user_id = Uuid::parse_str(&claims.sub)
        .map(PartyId::from_uuid)
        .map_err(|_| AuthError::MalformedSubject)?;
    let role =
        RoleCode::from_str(&claims.role).map_err(|_| AuthError::UnknownRole(claims.role.clone()))?;
    Ok(ActingUser::new(user_id, role))
}
