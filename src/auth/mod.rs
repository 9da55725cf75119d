/// Authentication module
///
/// Handles JWT token issuance/verification, password hashing, and the
/// credential service orchestrating them against the in-memory stores.

mod claims;
mod jwt;
mod password;
mod service;

pub use claims::AccessClaims;
pub use claims::RefreshClaims;
pub use jwt::generate_access_token;
pub use jwt::generate_refresh_token;
pub use jwt::verify_access_token;
pub use jwt::verify_refresh_token;
pub use password::hash_password;
pub use password::verify_password;
pub use service::AuthService;
pub use service::AuthenticatedUser;
pub use service::TokenPair;
