/// Credential Service
///
/// Orchestrates the user store, password hashing, token issuance, and the
/// refresh-token registry. Every operation is atomic from the caller's
/// side: a failed registration leaves no user behind, a failed refresh
/// leaves the stored refresh token untouched.

use std::sync::Mutex;

use serde::Serialize;

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, verify_access_token, verify_refresh_token,
};
use crate::auth::password::verify_password;
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError};
use crate::store::{RefreshTokenRegistry, User, UserStore};

/// Access + refresh token pair returned by register and login
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Public identity resolved from a valid access token
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: u64,
    pub email: String,
}

pub struct AuthService {
    users: UserStore,
    refresh_tokens: RefreshTokenRegistry,
    jwt: JwtSettings,
    // Serializes register's find-then-create so two concurrent
    // registrations of the same email cannot both pass the uniqueness
    // check. The store mutexes alone do not cover the gap between the two
    // calls.
    registration: Mutex<()>,
}

impl AuthService {
    pub fn new(jwt: JwtSettings) -> Self {
        Self {
            users: UserStore::new(),
            refresh_tokens: RefreshTokenRegistry::new(),
            jwt,
            registration: Mutex::new(()),
        }
    }

    /// Access-token lifetime in seconds, for `expires_in` response fields.
    pub fn access_token_expiry(&self) -> i64 {
        self.jwt.access_token_expiry
    }

    /// Register a new user and log them in.
    ///
    /// # Errors
    /// `DuplicateUser` if the email is already registered.
    pub fn register(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let _guard = self.registration.lock().expect("registration lock poisoned");

        if self.users.find_by_email(email).is_some() {
            return Err(AuthError::DuplicateUser.into());
        }
        let user = self.users.create(email, password)?;

        tracing::info!(user_id = user.id, "User registered");

        self.login_user(&user)
    }

    /// Authenticate with email and password, issuing a fresh token pair.
    ///
    /// # Errors
    /// `InvalidCredentials` on unknown email or wrong password; the two
    /// cases are indistinguishable to the caller.
    pub fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = user.id, "User logged in");

        self.login_user(&user)
    }

    /// Issue a token pair for an already-validated user.
    ///
    /// Recording the new refresh token revokes whatever refresh token was
    /// previously current for this user.
    pub fn login_user(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = generate_access_token(user.id, &user.email, &self.jwt)?;
        let refresh_token = generate_refresh_token(user.id, &self.jwt)?;

        self.refresh_tokens.record(user.id, &refresh_token);

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Mint a new access token from a refresh token.
    ///
    /// The refresh token itself is not rotated; it stays current until the
    /// next login replaces it or it expires.
    ///
    /// # Errors
    /// `InvalidRefreshToken` if the token fails verification,
    /// `RevokedRefreshToken` if it is no longer the current one for its
    /// user, `UserNotFound` if the subject id no longer resolves.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims =
            verify_refresh_token(refresh_token, &self.jwt).ok_or(AuthError::InvalidRefreshToken)?;

        if !self.refresh_tokens.is_current(claims.sub, refresh_token) {
            tracing::warn!(user_id = claims.sub, "Attempt to use a revoked refresh token");
            return Err(AuthError::RevokedRefreshToken.into());
        }

        let user = self
            .users
            .find_by_id(claims.sub)
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = user.id, "Access token refreshed");

        generate_access_token(user.id, &user.email, &self.jwt)
    }

    /// Resolve an access token to the user it belongs to.
    ///
    /// # Errors
    /// `Unauthenticated` if the token fails verification or its email does
    /// not resolve to a stored user.
    pub fn authorize(&self, access_token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims =
            verify_access_token(access_token, &self.jwt).ok_or(AuthError::Unauthenticated)?;

        let user = self
            .users
            .find_by_email(&claims.email)
            .ok_or(AuthError::Unauthenticated)?;

        Ok(AuthenticatedUser {
            id: user.id,
            email: user.email,
        })
    }
}
