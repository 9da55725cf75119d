/// Refresh Token Registry
///
/// Tracks the single currently-valid refresh token per user id. Recording a
/// new token overwrites the slot, which is the only revocation mechanism:
/// a token that no longer equals the stored value is revoked. No history is
/// kept and there is no explicit logout path.

use std::collections::HashMap;
use std::sync::Mutex;

pub struct RefreshTokenRegistry {
    current: Mutex<HashMap<u64, String>>,
}

impl RefreshTokenRegistry {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(HashMap::new()),
        }
    }

    /// Store or overwrite the current refresh token for a user.
    ///
    /// Overwriting silently invalidates whatever token was current before.
    pub fn record(&self, user_id: u64, refresh_token: &str) {
        let mut current = self.current.lock().expect("refresh token registry lock poisoned");
        current.insert(user_id, refresh_token.to_string());
    }

    /// Exact string equality against the stored token; absent entry or
    /// mismatch both mean "not current".
    pub fn is_current(&self, user_id: u64, refresh_token: &str) -> bool {
        let current = self.current.lock().expect("refresh token registry lock poisoned");
        current.get(&user_id).map(String::as_str) == Some(refresh_token)
    }
}

impl Default for RefreshTokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
