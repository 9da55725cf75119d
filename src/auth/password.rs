/// Password Hashing and Verification
///
/// Bcrypt with a per-call random salt: hashing the same password twice
/// yields different digests, and verification recovers the salt from the
/// digest itself.

use bcrypt::{hash, verify};

use crate::error::AppError;

/// Work factor matching the deployed service (2^10 rounds).
const HASH_COST: u32 = 10;

/// Hash a password using bcrypt
///
/// # Errors
/// Returns error only if bcrypt itself fails; any string input is accepted.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its bcrypt digest
///
/// Returns `false` for a mismatch and also for a malformed digest; a bad
/// stored hash must read as "wrong password", never as a server fault.
pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(password, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "correct horse battery staple";
        let digest = hash_password(password).expect("Failed to hash password");

        // Digest must never equal the plaintext
        assert_ne!(password, digest);
        // Digest carries the bcrypt identifier
        assert!(digest.starts_with("$2"));
    }

    #[test]
    fn test_same_password_different_digests() {
        let password = "pw1";
        let first = hash_password(password).expect("Failed to hash password");
        let second = hash_password(password).expect("Failed to hash password");

        // Per-call salt makes digests unique
        assert_ne!(first, second);
        assert!(verify_password(password, &first));
        assert!(verify_password(password, &second));
    }

    #[test]
    fn test_verify_password() {
        let password = "pw1";
        let digest = hash_password(password).expect("Failed to hash password");

        assert!(verify_password(password, &digest));
    }

    #[test]
    fn test_verify_wrong_password() {
        let digest = hash_password("pw1").expect("Failed to hash password");

        assert!(!verify_password("pw2", &digest));
    }

    #[test]
    fn test_verify_malformed_digest_is_false_not_error() {
        assert!(!verify_password("pw1", "not-a-bcrypt-digest"));
        assert!(!verify_password("pw1", ""));
    }
}
