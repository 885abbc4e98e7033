pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// Re-export necessary items
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name for the new account. Must be non-empty after trimming.
    #[validate(custom = "validate_name")]
    pub name: String,
    /// Email address for the new account. Must be a valid email format;
    /// stored lowercased.
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    /// Password for the new account. Must be at least 6 characters long.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Represents the payload for a user login request.
///
/// Deliberately unvalidated beyond deserialization: any credential pair that
/// does not match a stored user fails with the same undifferentiated
/// `InvalidCredentials` error, so a malformed email is indistinguishable
/// from a wrong password.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body after successful registration or login: the user's public
/// fields plus a freshly signed bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("Name is required"));
        return Err(error);
    }
    Ok(())
}
