use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime. Expiry is the only bound on a token: there is no
/// revocation mechanism.
const TOKEN_TTL_DAYS: i64 = 30;

/// Represents the claims encoded within a bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: Uuid,
    /// Timestamp (seconds since epoch) at which the token was issued.
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Generates a signed, time-limited bearer token for a given user ID.
///
/// The token expires in 30 days and is signed with the process-wide secret
/// from [`crate::config::Config`], passed in explicitly rather than read
/// from the environment here.
pub fn generate_token(user_id: Uuid, secret: &str) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(chrono::Duration::days(TOKEN_TTL_DAYS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        iat: now.timestamp() as usize,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a bearer token and decodes its claims.
///
/// Default validation checks apply (signature, expiration). No route
/// currently requires a token — tokens are issued at registration/login but
/// not yet enforced anywhere — so this returns the raw `jsonwebtoken` error
/// for future callers to map as they see fit.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
