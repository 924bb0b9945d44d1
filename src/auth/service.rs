use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::auth::domain::{
    AuthError, AuthResult, AuthUser, NewUserRecord, SignInInput, SignUpInput, UserIdentity,
};
use crate::auth::ports::{CredentialHasher, TokenIssuer, UserStore};

/// Orchestrates registration and login over injected capabilities.
/// Holds no per-request state; every call is an independent unit of
/// work and the store is the only shared resource.
pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    issuer: Arc<dyn TokenIssuer>,
    store_timeout: Duration,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        issuer: Arc<dyn TokenIssuer>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            store_timeout,
        }
    }

    /// Registers a new user and returns their identity plus a fresh
    /// session token. The plaintext password is dropped as soon as it
    /// has been hashed; email uniqueness is the store's to enforce.
    pub async fn sign_up(&self, input: SignUpInput) -> AuthResult<AuthUser> {
        require_non_empty("email", &input.email)?;
        require_non_empty("password", &input.password)?;
        require_non_empty("name", &input.name)?;

        let SignUpInput {
            email,
            password,
            name,
            avatar,
        } = input;

        let password_hash = self.hasher.hash(&password)?;
        drop(password);

        let record = self
            .store_call(self.store.insert_one(NewUserRecord {
                name,
                email,
                password_hash,
                avatar,
            }))
            .await?;

        let user = UserIdentity::from(record);
        let token = self.issuer.issue(&user)?;

        info!(user_id = %user.id, "user registered");

        Ok(AuthUser { user, token })
    }

    /// Authenticates an existing user. A missing account and a wrong
    /// password fail with the same error value, and the miss path burns
    /// a dummy verification so timing does not tell them apart either.
    pub async fn sign_in(&self, input: SignInInput) -> AuthResult<AuthUser> {
        require_non_empty("email", &input.email)?;
        require_non_empty("password", &input.password)?;

        let record = self
            .store_call(self.store.find_by_email(&input.email))
            .await?;

        let record = match record {
            Some(record) => record,
            None => {
                self.hasher.dummy_verify(&input.password);
                warn!("sign-in failed: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(&input.password, &record.password_hash)? {
            warn!(user_id = %record.id, "sign-in failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let user = UserIdentity::from(record);
        let token = self.issuer.issue(&user)?;

        info!(user_id = %user.id, "sign-in successful");

        Ok(AuthUser { user, token })
    }

    /// Single-attempt store round trip under a bounded timeout. No
    /// retries; an elapsed timeout surfaces as a persistence failure.
    async fn store_call<T>(&self, fut: impl Future<Output = AuthResult<T>>) -> AuthResult<T> {
        tokio::time::timeout(self.store_timeout, fut)
            .await
            .map_err(|_| AuthError::Persistence("user store call timed out".to_string()))?
    }
}

fn require_non_empty(field: &str, value: &str) -> AuthResult<()> {
    if value.trim().is_empty() {
        return Err(AuthError::Validation(format!("{field} is required")));
    }
    Ok(())
}
