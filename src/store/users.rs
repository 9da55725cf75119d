/// Volatile User Store
///
/// Users live in a mutex-guarded vector for the lifetime of the process.
/// Ids start at 1 and only ever grow; records are never updated or deleted.
/// Lookups are linear scans, which is fine at this scale.

use std::sync::Mutex;

use crate::auth::hash_password;
use crate::error::AppError;

/// Identity record. The hash is opaque bcrypt output, never a plaintext
/// password.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
}

struct UserStoreInner {
    users: Vec<User>,
    next_id: u64,
}

pub struct UserStore {
    inner: Mutex<UserStoreInner>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(UserStoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a user with the next id, hashing the password first.
    ///
    /// Does NOT check email uniqueness; that check-then-act belongs to the
    /// caller, which must serialize it against concurrent registrations.
    ///
    /// # Errors
    /// Returns error if password hashing fails
    pub fn create(&self, email: &str, password: &str) -> Result<User, AppError> {
        // Hash outside the lock; bcrypt is deliberately slow
        let password_hash = hash_password(password)?;

        let mut inner = self.inner.lock().expect("user store lock poisoned");
        let user = User {
            id: inner.next_id,
            email: email.to_string(),
            password_hash,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());

        Ok(user)
    }

    /// Case-sensitive exact match over all records
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.lock().expect("user store lock poisoned");
        inner.users.iter().find(|u| u.email == email).cloned()
    }

    pub fn find_by_id(&self, id: u64) -> Option<User> {
        let inner = self.inner.lock().expect("user store lock poisoned");
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().expect("user store lock poisoned");
        inner.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;

    #[test]
    fn test_create_assigns_monotonic_ids_from_one() {
        let store = UserStore::new();

        let first = store.create("a@x.com", "pw1").expect("Failed to create user");
        let second = store.create("b@x.com", "pw2").expect("Failed to create user");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_stores_hash_not_plaintext() {
        let store = UserStore::new();

        let user = store.create("a@x.com", "pw1").expect("Failed to create user");

        assert_ne!(user.password_hash, "pw1");
        assert!(verify_password("pw1", &user.password_hash));
    }

    #[test]
    fn test_find_by_email_exact_match() {
        let store = UserStore::new();
        store.create("a@x.com", "pw1").expect("Failed to create user");

        assert!(store.find_by_email("a@x.com").is_some());
        // Case-sensitive as stored
        assert!(store.find_by_email("A@x.com").is_none());
        assert!(store.find_by_email("b@x.com").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let store = UserStore::new();
        let user = store.create("a@x.com", "pw1").expect("Failed to create user");

        assert_eq!(store.find_by_id(user.id).map(|u| u.email), Some("a@x.com".to_string()));
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn test_create_alone_does_not_enforce_uniqueness() {
        let store = UserStore::new();
        store.create("a@x.com", "pw1").expect("Failed to create user");
        store.create("a@x.com", "pw2").expect("Failed to create user");

        // Uniqueness is the orchestrator's job, not the store's
        assert_eq!(store.len(), 2);
    }
}
