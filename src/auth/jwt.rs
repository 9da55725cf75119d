/// JWT Token Issuance and Verification
///
/// Signs and checks the two token kinds with distinct secrets. Verification
/// never surfaces parser errors: any failure (bad signature, malformed
/// token, wrong issuer, expiry, wrong payload shape) is normalized to
/// `None` so callers only decide between "claims" and "absent".

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{AccessClaims, RefreshClaims};
use crate::configuration::JwtSettings;
use crate::error::AppError;

/// Generate a new access token for a user
///
/// # Errors
/// Returns error if token signing fails
pub fn generate_access_token(
    user_id: u64,
    email: &str,
    config: &JwtSettings,
) -> Result<String, AppError> {
    let claims = AccessClaims::new(
        user_id,
        email.to_string(),
        config.access_token_expiry,
        config.issuer.clone(),
    );

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.access_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Access token generation failed: {}", e)))
}

/// Generate a new refresh token for a user
///
/// Signed with the refresh secret, so it can never pass access-token
/// verification (and vice versa).
///
/// # Errors
/// Returns error if token signing fails
pub fn generate_refresh_token(user_id: u64, config: &JwtSettings) -> Result<String, AppError> {
    let claims = RefreshClaims::new(user_id, config.refresh_token_expiry, config.issuer.clone());

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Refresh token generation failed: {}", e)))
}

/// Verify an access token, returning its claims if valid
pub fn verify_access_token(token: &str, config: &JwtSettings) -> Option<AccessClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(config.access_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("Access token validation failed: {}", e);
    })
    .ok()
}

/// Verify a refresh token, returning its claims if valid
pub fn verify_refresh_token(token: &str, config: &JwtSettings) -> Option<RefreshClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);

    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(config.refresh_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("Refresh token validation failed: {}", e);
    })
    .ok()
}
