/// JWT Claims structures
///
/// Strongly-typed payloads for the two token kinds. Decoding validates the
/// required fields, so a token whose payload lacks a field (for example a
/// refresh token presented where an access token is expected) fails to
/// deserialize instead of producing a half-shaped claims object.

use serde::{Deserialize, Serialize};

/// Claims carried by short-lived access tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: u64,
    /// User email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Unique token id; two tokens minted in the same second must still
    /// differ, or revocation-by-replacement could not tell them apart
    pub jti: String,
}

impl AccessClaims {
    pub fn new(user_id: u64, email: String, expiry_seconds: i64, issuer: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user_id,
            email,
            exp: now + expiry_seconds,
            iat: now,
            iss: issuer,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        self.exp < chrono::Utc::now().timestamp()
    }
}

/// Claims carried by long-lived refresh tokens
///
/// Deliberately minimal: only the subject id. Refresh tokens authorize one
/// thing, minting a new access token, and carry nothing else.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshClaims {
    /// Subject (user id)
    pub sub: u64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Unique token id
    pub jti: String,
}

impl RefreshClaims {
    pub fn new(user_id: u64, expiry_seconds: i64, issuer: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user_id,
            exp: now + expiry_seconds,
            iat: now,
            iss: issuer,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }
}
