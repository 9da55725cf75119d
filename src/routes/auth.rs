/// Authentication Routes
///
/// Thin JSON adapters over the credential service: registration, login,
/// token refresh, and the guarded profile endpoint. Status mapping for
/// failures lives on `AppError`; missing body fields are rejected by the
/// JSON extractor with 400 before a handler runs.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthService, AuthenticatedUser};
use crate::error::AppError;

/// User registration request
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// User login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token refresh request
#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response carrying a fresh access/refresh token pair
#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response carrying only a renewed access token
#[derive(Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// POST /auth/register
///
/// Register a new user and return a token pair, exactly as a login would.
///
/// # Errors
/// - 400: Email already registered
/// - 500: Internal server error
pub async fn register(
    form: web::Json<RegisterRequest>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let pair = auth.register(&form.email, &form.password)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: auth.access_token_expiry(),
    }))
}

/// POST /auth/login
///
/// Authenticate with email and password; a successful login replaces the
/// user's current refresh token.
///
/// # Errors
/// - 401: Invalid credentials (same message for unknown email and wrong
///   password, preventing user enumeration)
/// - 500: Internal server error
pub async fn login(
    form: web::Json<LoginRequest>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let pair = auth.login(&form.email, &form.password)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: auth.access_token_expiry(),
    }))
}

/// POST /auth/refresh
///
/// Exchange a current refresh token for a new access token. The refresh
/// token is not rotated; only a new login replaces it.
///
/// # Errors
/// - 401: Invalid, expired, or revoked refresh token; or subject no longer
///   exists
/// - 500: Internal server error
pub async fn refresh(
    form: web::Json<RefreshRequest>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let access_token = auth.refresh(&form.refresh_token)?;

    Ok(HttpResponse::Ok().json(RefreshResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: auth.access_token_expiry(),
    }))
}

/// GET /auth/profile
///
/// Return the authenticated user's public identity. The identity is
/// injected by the JWT middleware; this handler never sees the raw token.
///
/// # Errors
/// - 401: Missing or invalid token (handled by middleware)
pub async fn profile(identity: web::ReqData<AuthenticatedUser>) -> HttpResponse {
    HttpResponse::Ok().json(identity.into_inner())
}
