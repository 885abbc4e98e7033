//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. Every failure a handler can produce maps onto one of its
//! variants, and `AppError` implements `actix_web::error::ResponseError` so
//! handlers can return `Result<_, AppError>` and have actix render the right
//! status code with a `{"message": ...}` JSON body.
//!
//! Unexpected failures (database, hashing, signing) are deliberately surfaced
//! to the client as a generic 500 body; the underlying detail is logged
//! server-side and never leaks into the response.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or out-of-bound input (HTTP 400). Carries the constraint
    /// violation message so the client knows which rule was broken.
    ValidationError(String),
    /// Registration attempted with an email that already has an account
    /// (HTTP 400).
    DuplicateEmail,
    /// Login failed (HTTP 401). Deliberately undifferentiated: the same
    /// variant covers both unknown email and wrong password, so responses
    /// cannot be used for account enumeration.
    InvalidCredentials,
    /// A requested resource does not exist (HTTP 404).
    NotFound(String),
    /// An error originating from the database driver (HTTP 500).
    DatabaseError(String),
    /// Any other unexpected server-side failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DuplicateEmail => write!(f, "Duplicate Email"),
            AppError::InvalidCredentials => write!(f, "Invalid Credentials"),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationError(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::DuplicateEmail => HttpResponse::BadRequest().json(json!({
                "message": "User already exists"
            })),
            AppError::InvalidCredentials => HttpResponse::Unauthorized().json(json!({
                "message": "Invalid email or password"
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "message": msg
            })),
            // Internal detail stays in the logs; the client gets a generic body.
            AppError::DatabaseError(msg) | AppError::InternalServerError(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "message": "Something went wrong!"
                }))
            }
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` maps to `NotFound`. A unique-constraint violation maps to
/// `DuplicateEmail`: the only unique index in the schema is on `users.email`,
/// so a concurrent duplicate registration that slips past the pre-insert
/// check still surfaces as the same error kind. Everything else becomes a
/// `DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(e) if e.is_unique_violation() => AppError::DuplicateEmail,
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`,
/// preserving the constraint messages.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
