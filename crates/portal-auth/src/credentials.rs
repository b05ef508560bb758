//! Credential model and lookup
//!
//! The portal is single-tenant: exactly one credential record exists, fixed
//! at startup. Lookup still goes through the `CredentialStore` trait so a
//! real user store can be substituted without touching request handling.

use crate::error::{AuthError, AuthResult};
use crate::password::verify_password;
use async_trait::async_trait;
use std::sync::Arc;

/// A stored credential record. Holds the bcrypt hash only, never a
/// plaintext secret.
#[derive(Debug, Clone)]
pub struct Credential {
    /// User's unique identifier
    pub user_id: u64,
    /// Username
    pub username: String,
    /// Bcrypt password hash (includes salt)
    pub password_hash: String,
}

/// Credential lookup abstraction.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up the credential for a username.
    ///
    /// Returns `Ok(None)` for an unknown username; errors are reserved for
    /// backend failures.
    async fn lookup(&self, username: &str) -> AuthResult<Option<Credential>>;
}

/// The single compiled-in credential, fixed at startup.
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    credential: Credential,
}

impl StaticCredentialStore {
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn lookup(&self, username: &str) -> AuthResult<Option<Credential>> {
        if username == self.credential.username {
            Ok(Some(self.credential.clone()))
        } else {
            Ok(None)
        }
    }
}

/// Authenticate a username/password pair against the store.
///
/// Unknown usernames and wrong passwords both map to
/// `AuthError::InvalidCredentials` so the two cases cannot be told apart
/// by a caller probing for valid usernames.
///
/// # Errors
/// - `AuthError::InvalidCredentials` on unknown user or password mismatch
/// - `AuthError::HashingError` if the stored hash is not a valid bcrypt string
pub async fn authenticate(
    username: &str,
    password: &str,
    store: &Arc<dyn CredentialStore>,
) -> AuthResult<Credential> {
    let credential = store
        .lookup(username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if verify_password(password, &credential.password_hash).await? {
        Ok(credential)
    } else {
        log::debug!("Password verification failed for '{}'", username);
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;

    async fn test_store(password: &str) -> Arc<dyn CredentialStore> {
        // Low cost for faster tests
        let hash = hash_password(password, Some(4)).await.unwrap();
        Arc::new(StaticCredentialStore::new(Credential {
            user_id: 1,
            username: "admin".to_string(),
            password_hash: hash,
        }))
    }

    #[tokio::test]
    async fn test_authenticate_valid_pair() {
        let store = test_store("hunter22!").await;
        let credential = authenticate("admin", "hunter22!", &store).await.unwrap();
        assert_eq!(credential.user_id, 1);
        assert_eq!(credential.username, "admin");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let store = test_store("hunter22!").await;
        let result = authenticate("admin", "wrong-password", &store).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let store = test_store("hunter22!").await;
        let result = authenticate("root", "hunter22!", &store).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    /// Unknown user and wrong password must be indistinguishable.
    #[tokio::test]
    async fn test_authenticate_failures_are_uniform() {
        let store = test_store("hunter22!").await;
        let unknown = authenticate("root", "hunter22!", &store).await.unwrap_err();
        let mismatch = authenticate("admin", "nope", &store).await.unwrap_err();
        assert_eq!(unknown.to_string(), mismatch.to_string());
    }

    #[tokio::test]
    async fn test_authenticate_username_case_sensitive() {
        let store = test_store("hunter22!").await;
        let result = authenticate("Admin", "hunter22!", &store).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
