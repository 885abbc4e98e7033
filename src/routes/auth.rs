use crate::{
    auth::{generate_token, hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest},
    config::Config,
    error::AppError,
    models::User,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns its public fields plus a signed
/// bearer token. Exactly one store write happens on success.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let email = register_data.email.trim().to_lowercase();

    // Check if email already exists. Not atomic against a concurrent
    // duplicate, but the unique index on users.email catches the race and
    // the resulting unique violation maps to the same DuplicateEmail error.
    let existing_user = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&**pool)
        .await?;

    if existing_user.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
         RETURNING id, name, email, created_at",
    )
    .bind(register_data.name.trim())
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await?;

    // Generate token
    let token = generate_token(user.id, &config.jwt_secret)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    }))
}

/// Login user
///
/// Authenticates a user by email and password and returns a fresh bearer
/// token. Read-only: no store writes. Both an unknown email and a wrong
/// password produce the same undifferentiated error.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let email = login_data.email.trim().to_lowercase();

    let user = sqlx::query_as::<_, (Uuid, String, String, String)>(
        "SELECT id, name, email, password_hash FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(&**pool)
    .await?;

    match user {
        Some((id, name, email, password_hash)) => {
            if verify_password(&login_data.password, &password_hash)? {
                let token = generate_token(id, &config.jwt_secret)?;
                Ok(HttpResponse::Ok().json(AuthResponse {
                    id,
                    name,
                    email,
                    token,
                }))
            } else {
                Err(AppError::InvalidCredentials)
            }
        }
        None => Err(AppError::InvalidCredentials),
    }
}
