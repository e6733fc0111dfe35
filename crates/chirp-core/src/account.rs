use std::sync::Arc;

use chirp_types::models::Account;

use crate::error::ServiceError;
use crate::store::AccountStore;

const MIN_PASSWORD_LEN: usize = 4;

/// Registration and login rules over an [`AccountStore`].
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Persist a new account. The username must be non-empty and unused,
    /// the password at least 4 characters. The store's UNIQUE constraint on
    /// username backstops the existence check against racing registrations.
    pub fn register(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        if username.is_empty() {
            return Err(ServiceError::InvalidInput("username must not be empty"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::InvalidInput(
                "password must be at least 4 characters",
            ));
        }
        if self.store.find_by_username(username)?.is_some() {
            return Err(ServiceError::DuplicateUsername);
        }

        Ok(self.store.insert(username, password)?)
    }

    /// Exact-match credential check: case-sensitive, no trimming, and the
    /// stored password is compared verbatim (no hashing).
    pub fn login(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        let account = self
            .store
            .find_by_username(username)?
            .ok_or(ServiceError::AuthenticationFailed)?;

        if account.password != password {
            return Err(ServiceError::AuthenticationFailed);
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::memory::MemoryStore;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn register_assigns_ids_from_one() {
        let svc = service();
        let alice = svc.register("alice", "pass1234").unwrap();
        let bob = svc.register("bob", "pass1234").unwrap();
        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.username, "alice");
        assert_eq!(alice.password, "pass1234");
    }

    #[test]
    fn register_rejects_empty_username() {
        let svc = service();
        let err = svc.register("", "validpass").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn register_rejects_short_password() {
        let svc = service();
        let err = svc.register("bob", "abc").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn register_accepts_four_char_password() {
        let svc = service();
        assert!(svc.register("bob", "abcd").is_ok());
    }

    #[test]
    fn register_rejects_duplicate_username() {
        let svc = service();
        svc.register("alice", "pass1234").unwrap();
        let err = svc.register("alice", "other123").unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateUsername));
    }

    #[test]
    fn login_returns_stored_account() {
        let svc = service();
        let registered = svc.register("alice", "pass1234").unwrap();
        let logged_in = svc.login("alice", "pass1234").unwrap();
        assert_eq!(logged_in, registered);
    }

    #[test]
    fn login_rejects_unknown_username() {
        let svc = service();
        let err = svc.login("nobody", "pass1234").unwrap_err();
        assert!(matches!(err, ServiceError::AuthenticationFailed));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let svc = service();
        svc.register("alice", "pass1234").unwrap();
        let err = svc.login("alice", "wrong").unwrap_err();
        assert!(matches!(err, ServiceError::AuthenticationFailed));
    }

    #[test]
    fn login_is_exact_match() {
        let svc = service();
        svc.register("alice", "pass1234").unwrap();
        // No case normalization, no trimming.
        assert!(svc.login("Alice", "pass1234").is_err());
        assert!(svc.login("alice", "Pass1234").is_err());
        assert!(svc.login("alice", " pass1234").is_err());
    }
}
