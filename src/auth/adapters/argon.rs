use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::error;

use crate::auth::domain::{AuthError, AuthResult};
use crate::auth::ports::CredentialHasher;

/// Argon2id credential hasher with default parameters. Every hash gets
/// a fresh random salt, so hashing the same password twice yields two
/// different PHC strings that both verify.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| {
                error!("password hashing failed: {}", e);
                AuthError::Internal("password hashing failed".to_string())
            })?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, stored: &str) -> AuthResult<bool> {
        let parsed = PasswordHash::new(stored).map_err(|e| {
            error!("stored password hash is malformed: {}", e);
            AuthError::Internal("stored password hash is malformed".to_string())
        })?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => {
                error!("password verification failed: {}", e);
                Err(AuthError::Internal(
                    "password verification failed".to_string(),
                ))
            }
        }
    }

    fn dummy_verify(&self, plaintext: &str) -> bool {
        // Hash a random throwaway password and verify against it, so a
        // lookup miss takes about as long as a real mismatch.
        let throwaway: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();

        if let Ok(hash) = self.hash(&throwaway) {
            let _ = self.verify(plaintext, &hash);
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() -> anyhow::Result<()> {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("pw123")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pw123", &hash)?);
        assert!(!hasher.verify("wrong", &hash)?);

        Ok(())
    }

    #[test]
    fn hash_is_salted_per_call() -> anyhow::Result<()> {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("pw123")?;
        let second = hasher.hash("pw123")?;

        assert_ne!(first, second);
        assert!(hasher.verify("pw123", &first)?);
        assert!(hasher.verify("pw123", &second)?);

        Ok(())
    }

    #[test]
    fn mismatch_is_false_not_error() -> anyhow::Result<()> {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("correct")?;

        assert_eq!(hasher.verify("incorrect", &hash)?, false);

        Ok(())
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let hasher = Argon2Hasher::new();

        let result = hasher.verify("pw123", "not-a-phc-string");
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[test]
    fn dummy_verify_always_false() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.dummy_verify("pw123"));
    }
}
